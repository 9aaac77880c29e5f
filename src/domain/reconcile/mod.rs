// SPDX-License-Identifier: MPL-2.0
//! Correction plans for a single photo.

mod operation;
mod stage;

pub use operation::{Operation, OperationKind};
pub use stage::Stage;
