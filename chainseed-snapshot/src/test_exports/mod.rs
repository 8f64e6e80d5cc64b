// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

mod tools;

pub use tools::*;
