pub mod common;
pub mod heap_sort;
pub mod insertion_sort;
pub mod introsort;
pub mod merge;
pub mod merge_sort;
pub mod partition;
pub mod quick_sort;

#[cfg(test)]
pub(crate) mod test_support;
