// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod clean_temp;
pub mod init;
pub mod layout;
pub mod resize;
pub mod store;
