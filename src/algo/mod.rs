//! Module containing the parallel primitives and the visits built on them.

pub mod scan;

pub mod filter;

pub mod degree;

pub mod visits;
