// Copyright (c) 2025 CHAINSEED LABS <info@chainseed.net>

mod batcher_tests;
mod builder_tests;
mod inject_tests;
mod tools;
