// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Overstory crates. See the `examples/` directory.
