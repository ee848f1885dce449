//! Parallel sorting built on [`rayon::join`].

pub mod quick_sort;
