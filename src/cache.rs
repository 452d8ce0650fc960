//! In-memory cache of downloaded image bytes, keyed by absolute image URL
//!
//! Filled by lightbox loads and by the deferred preload. Oldest entries are
//! evicted first once the capacity is reached.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct ImageCache {
    capacity: usize,
    entries: HashMap<String, Arc<Vec<u8>>>,
    order: VecDeque<String>,
}

impl ImageCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, url: &str) -> Option<Arc<Vec<u8>>> {
        self.entries.get(url).cloned()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn insert(&mut self, url: String, bytes: Vec<u8>) -> Arc<Vec<u8>> {
        let bytes = Arc::new(bytes);
        if self.entries.insert(url.clone(), bytes.clone()).is_none() {
            self.order.push_back(url);
        }

        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        bytes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache handle shared between the UI task and background downloads
pub type SharedImageCache = Arc<Mutex<ImageCache>>;

pub fn shared(capacity: usize) -> SharedImageCache {
    Arc::new(Mutex::new(ImageCache::new(capacity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = ImageCache::new(2);
        cache.insert("a".to_string(), vec![1, 2, 3]);
        assert_eq!(cache.get("a").as_deref(), Some(&vec![1, 2, 3]));
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut cache = ImageCache::new(2);
        cache.insert("a".to_string(), vec![1]);
        cache.insert("b".to_string(), vec![2]);
        cache.insert("c".to_string(), vec![3]);

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn test_reinsert_does_not_duplicate_order() {
        let mut cache = ImageCache::new(2);
        cache.insert("a".to_string(), vec![1]);
        cache.insert("a".to_string(), vec![9]);
        cache.insert("b".to_string(), vec![2]);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").as_deref(), Some(&vec![9]));
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut cache = ImageCache::new(0);
        cache.insert("a".to_string(), vec![1]);
        assert_eq!(cache.len(), 1);
    }
}
