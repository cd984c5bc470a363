#![no_main]

use libfuzzer_sys::fuzz_target;
use recency_cache::LruCache;

// Byte 0 picks the capacity; every following 3-byte chunk is one operation
// (opcode, key, value-low). Invariants are checked after each step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 || data.len() > 16_384 {
        return;
    }

    let capacity = usize::from(data[0] % 12) + 1;
    let mut cache: LruCache<u8, u16> = LruCache::new(capacity);

    for chunk in data[1..].chunks_exact(3) {
        let key = chunk[1] % 32;
        let value = u16::from_le_bytes([chunk[1], chunk[2]]);

        match chunk[0] % 8 {
            0 | 1 | 2 => {
                cache.put(key, value);
                assert_eq!(cache.peek(&key), Some(&value));
            }
            3 => {
                cache.get(&key);
            }
            4 => {
                cache.peek(&key);
            }
            5 => {
                cache.remove(&key);
                assert!(!cache.contains_key(&key));
            }
            6 => {
                if let Some((k, _)) = cache.pop_lru() {
                    assert!(!cache.contains_key(&k));
                }
            }
            _ => {
                cache.contains_key(&key);
            }
        }

        assert!(cache.len() <= cache.capacity());

        let mru: Vec<u8> = cache.iter_mru().map(|(k, _)| *k).collect();
        let mut lru: Vec<u8> = cache.iter_lru().map(|(k, _)| *k).collect();
        assert_eq!(mru.len(), cache.len());
        lru.reverse();
        assert_eq!(mru, lru);

        if let Some((k, _)) = cache.peek_mru() {
            assert_eq!(mru.first(), Some(k));
        }
        if let Some((k, _)) = cache.peek_lru() {
            assert_eq!(mru.last(), Some(k));
        }
    }
});
