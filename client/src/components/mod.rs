//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and inventory surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod alert_host;
pub mod delete_dialog;
pub mod product_cards;
pub mod product_modal;
pub mod product_table;
pub mod sidebar;
pub mod stat_card;
