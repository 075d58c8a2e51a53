use std::cmp::Ordering;

/// Ordered by key only, so the tag exposes how equal keys were rearranged.
#[derive(Clone, Copy, Debug)]
pub struct Keyed {
    pub key: i32,
    pub tag: char,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

pub fn keyed(pairs: &[(i32, char)]) -> Vec<Keyed> {
    pairs.iter().map(|&(key, tag)| Keyed { key, tag }).collect()
}

pub fn tags(data: &[Keyed]) -> String {
    data.iter().map(|k| k.tag).collect()
}
