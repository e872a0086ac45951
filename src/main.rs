// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use foldjob::errors::FoldJobError;

fn main() -> Result<(), FoldJobError> {
    foldjob::run()
}
