// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod inspect;
pub mod model;
pub mod paging;
pub mod search;
pub mod state;
pub mod store;

pub use inspect::*;
pub use model::*;
pub use paging::*;
pub use search::*;
pub use state::*;
pub use store::*;
