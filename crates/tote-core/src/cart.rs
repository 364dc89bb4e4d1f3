//! # Cart
//!
//! The cart entity and the pure reducers that move it from one state to the
//! next.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Reducers                                        │
//! │                                                                         │
//! │  Store Operation          Reducer                 Cart State Change     │
//! │  ───────────────          ───────                 ─────────────────     │
//! │                                                                         │
//! │  add_product() ─────────► plan_add() ──┬────────► with_amount(a + 1)   │
//! │                                        └────────► with_item(new, 1)    │
//! │                                                                         │
//! │  update_product_amount()► with_amount(n) ───────► items[i].amount = n  │
//! │                                                                         │
//! │  remove_product() ──────► without(id) ──────────► items.retain(..)     │
//! │                                                                         │
//! │  NOTE: Reducers never mutate in place. They take the latest cart and   │
//! │        return the next one, so a failed persist simply drops it.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::{CartResult, ValidationError};
use crate::types::{ProductDetails, ProductId, StockSnapshot};
use crate::validation::ensure_stock;
use crate::INITIAL_AMOUNT;

// =============================================================================
// Line Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `id`: Catalog product id; at most one line item per id
/// - `amount`: Quantity, always positive
/// - `attributes`: Product fields (title, price, image, ...) captured when the
///   product was first added. Serialized flat next to `id` and `amount`:
///
/// ```json
/// { "id": 1, "amount": 2, "title": "Tênis", "price": 179.9, "image": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,

    pub amount: u32,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LineItem {
    /// Creates a line item with no product attributes.
    pub fn new(id: ProductId, amount: u32) -> Self {
        LineItem {
            id,
            amount,
            attributes: Map::new(),
        }
    }

    /// Builds a line item from catalog details.
    ///
    /// The catalog record is merged in as-is, except that `amount` always
    /// comes from the cart, never from the product payload.
    pub fn from_details(details: ProductDetails, amount: u32) -> Self {
        let ProductDetails { id, mut attributes } = details;
        attributes.remove("id");
        attributes.remove("amount");

        LineItem {
            id,
            amount,
            attributes,
        }
    }

    /// Product title, if the catalog supplied one.
    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(Value::as_str)
    }

    /// Product image URL, if the catalog supplied one.
    pub fn image(&self) -> Option<&str> {
        self.attributes.get("image").and_then(Value::as_str)
    }

    /// Unit price in cents.
    ///
    /// The catalog sends prices as decimal numbers (`179.9`); they are
    /// rounded to the nearest cent here. Missing or non-numeric prices count
    /// as zero.
    pub fn unit_price_cents(&self) -> i64 {
        self.attributes
            .get("price")
            .and_then(Value::as_f64)
            .map(|price| (price * 100.0).round() as i64)
            .unwrap_or(0)
    }

    /// Calculates the line total (unit price × amount).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents() * i64::from(self.amount)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id`
/// - Insertion order is preserved (and survives a persistence round-trip)
///
/// Serialized as a bare JSON array of line items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from items, keeping the first occurrence of each id.
    /// Items with a zero amount are dropped.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        items
            .into_iter()
            .filter(|item| item.amount > 0)
            .fold(Cart::new(), |cart, item| {
                if cart.contains(item.id) {
                    cart
                } else {
                    cart.with_item(item)
                }
            })
    }

    /// Parses a persisted cart blob.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let items: Vec<LineItem> =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
                field: "cart".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Cart::from_items(items))
    }

    /// Serializes the cart to its persisted form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of unique items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.amount)).sum()
    }

    /// Calculates the subtotal in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(LineItem::line_total_cents).sum()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }

    // -------------------------------------------------------------------------
    // Reducers
    // -------------------------------------------------------------------------

    /// Returns a cart where `id` has the given amount.
    ///
    /// Leaves the cart untouched if `id` is not present.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Cart {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    LineItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// Returns a cart with `item` appended.
    ///
    /// If the id is already present the existing entry is replaced in place
    /// so the uniqueness invariant holds.
    pub fn with_item(&self, item: LineItem) -> Cart {
        let mut items = self.items.clone();
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Cart { items }
    }

    /// Returns a cart without `id`. Absent ids are a no-op.
    pub fn without(&self, id: ProductId) -> Cart {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Cart { items }
    }
}

// =============================================================================
// Add Planning
// =============================================================================

/// What `add_product` should do once the stock snapshot is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPlan {
    /// Product already in the cart: bump it to `amount`.
    Increment { amount: u32 },
    /// Product not in the cart: fetch details and append with amount 1.
    Insert,
}

/// Decides how to add one unit of `stock.id` to `cart`.
///
/// ## Behavior
/// - Present with amount `a`: needs `a + 1` units in stock
/// - Absent: needs at least one unit in stock
pub fn plan_add(cart: &Cart, stock: &StockSnapshot) -> CartResult<AddPlan> {
    match cart.get(stock.id) {
        Some(item) => {
            let requested = item.amount.saturating_add(1);
            ensure_stock(stock, requested)?;
            Ok(AddPlan::Increment { amount: requested })
        }
        None => {
            ensure_stock(stock, INITIAL_AMOUNT)?;
            Ok(AddPlan::Insert)
        }
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart totals for the header badge and the cart page footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub item_count: u32,
    #[ts(type = "number")]
    pub total_quantity: u64,
    #[ts(type = "number")]
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            item_count: u32::try_from(cart.len()).unwrap_or(u32::MAX),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CartError;
    use serde_json::json;

    fn item(id: u64, amount: u32) -> LineItem {
        LineItem::new(ProductId::new(id), amount)
    }

    fn priced(id: u64, amount: u32, price: f64) -> LineItem {
        let details = ProductDetails::new(ProductId::new(id))
            .with_attribute("title", format!("Product {id}"))
            .with_attribute("price", price);
        LineItem::from_details(details, amount)
    }

    #[test]
    fn test_plan_add_new_product() {
        let cart = Cart::new();
        let stock = StockSnapshot::new(ProductId::new(1), 5);
        assert_eq!(plan_add(&cart, &stock).unwrap(), AddPlan::Insert);
    }

    #[test]
    fn test_plan_add_existing_product_increments() {
        let cart = Cart::from_items([item(1, 2)]);
        let stock = StockSnapshot::new(ProductId::new(1), 3);
        assert_eq!(
            plan_add(&cart, &stock).unwrap(),
            AddPlan::Increment { amount: 3 }
        );
    }

    #[test]
    fn test_plan_add_rejects_when_stock_exhausted() {
        let cart = Cart::from_items([item(1, 1)]);
        let stock = StockSnapshot::new(ProductId::new(1), 1);
        let err = plan_add(&cart, &stock).unwrap_err();
        assert!(matches!(
            err,
            CartError::StockInsufficient {
                available: 1,
                requested: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_plan_add_rejects_out_of_stock_new_product() {
        let stock = StockSnapshot::new(ProductId::new(9), 0);
        assert!(plan_add(&Cart::new(), &stock).is_err());
    }

    #[test]
    fn test_with_amount_only_touches_target() {
        let cart = Cart::from_items([item(1, 2), item(2, 1)]);
        let next = cart.with_amount(ProductId::new(1), 5);

        assert_eq!(next.get(ProductId::new(1)).unwrap().amount, 5);
        assert_eq!(next.get(ProductId::new(2)).unwrap().amount, 1);
        // Input cart is untouched
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 2);
    }

    #[test]
    fn test_with_amount_missing_id_is_noop() {
        let cart = Cart::from_items([item(1, 2)]);
        assert_eq!(cart.with_amount(ProductId::new(7), 3), cart);
    }

    #[test]
    fn test_with_item_keeps_ids_unique() {
        let cart = Cart::from_items([item(1, 1), item(2, 1)]);
        let next = cart.with_item(item(1, 4));

        assert_eq!(next.len(), 2);
        assert_eq!(next.items()[0].amount, 4);
    }

    #[test]
    fn test_without_removes_and_ignores_missing() {
        let cart = Cart::from_items([item(1, 1), item(2, 1)]);

        let next = cart.without(ProductId::new(2));
        assert_eq!(next, Cart::from_items([item(1, 1)]));

        assert_eq!(next.without(ProductId::new(2)), next);
    }

    #[test]
    fn test_from_details_amount_overrides_payload() {
        let details = ProductDetails::new(ProductId::new(3))
            .with_attribute("amount", 40)
            .with_attribute("title", "Tênis");
        let line = LineItem::from_details(details, 1);

        assert_eq!(line.amount, 1);
        assert_eq!(line.title(), Some("Tênis"));
        assert!(!line.attributes.contains_key("amount"));
    }

    #[test]
    fn test_persisted_shape_is_flat_array() {
        let cart = Cart::from_items([priced(1, 2, 179.9)]);
        let value: Value = serde_json::from_str(&cart.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!([{ "id": 1, "amount": 2, "title": "Product 1", "price": 179.9 }])
        );
    }

    #[test]
    fn test_json_reload_preserves_order_and_attributes() {
        let cart = Cart::from_items([priced(3, 1, 99.9), priced(1, 2, 179.9), item(2, 1)]);
        let reloaded = Cart::from_json(&cart.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, cart);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Cart::from_json("not json").is_err());
        assert!(Cart::from_json(r#"{"id":1}"#).is_err());
    }

    #[test]
    fn test_from_json_drops_zero_amount_items() {
        let cart =
            Cart::from_json(r#"[{"id":1,"amount":0,"title":"Tênis"},{"id":2,"amount":1}]"#)
                .unwrap();

        assert_eq!(cart.len(), 1);
        assert!(!cart.contains(ProductId::new(1)));
        assert_eq!(cart.get(ProductId::new(2)).unwrap().amount, 1);
    }

    #[test]
    fn test_summary() {
        let cart = Cart::from_items([priced(1, 2, 10.5), priced(2, 1, 0.99), item(3, 4)]);
        let summary = cart.summary();

        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total_quantity, 7);
        assert_eq!(summary.subtotal_cents, 2100 + 99);
    }
}
