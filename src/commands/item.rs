//! Item Commands
//!
//! Paths, request bodies and response parsing for item endpoints.

use serde::Serialize;

use crate::error::ClientError;
use crate::models::{Category, ItemId, ItemList};

pub const LIST_ITEMS_PATH: &str = "/api/get_todo_list_items";
pub const ADD_ITEM_PATH: &str = "/api/add_todo_list_item";
pub const REMOVE_ITEM_PATH: &str = "/api/remove_item";

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct NewItemArgs<'a> {
    pub item_value: &'a str,
    pub category: Category,
}

#[derive(Serialize)]
pub struct IdArgs<'a> {
    pub id: &'a ItemId,
}

pub fn parse_item_list(body: &str) -> Result<ItemList, ClientError> {
    Ok(serde_json::from_str(body)?)
}
