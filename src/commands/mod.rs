// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod members;
pub mod categories;
pub mod transactions;
pub mod savings;
pub mod summary;
pub mod settle;
pub mod budgets;
pub mod exporter;
pub mod doctor;
