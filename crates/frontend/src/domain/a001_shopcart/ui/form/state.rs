use contracts::domain::a001_shopcart::aggregate::{ItemDto, ShopcartDto};

/// The two halves of the form. Requests are sequenced per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Shopcart,
    Item,
}

/// `shopcart_id` / `shopcart_name` inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopcartFields {
    pub id: String,
    pub name: String,
}

impl ShopcartFields {
    pub fn populate(&mut self, cart: &ShopcartDto) {
        self.id = cart.id.as_string();
        self.name = cart.name.to_string();
    }

    pub fn clear(&mut self) {
        self.id.clear();
        self.name.clear();
    }
}

/// `item_*` inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields {
    pub id: String,
    pub shopcart_id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl ItemFields {
    pub fn populate(&mut self, item: &ItemDto) {
        self.id = item.id.as_string();
        self.shopcart_id = item.shopcart_id.as_string();
        self.name = item.name.to_string();
        self.quantity = item.quantity.to_string();
        self.price = item.price.to_string();
    }

    /// Clears everything except the owning cart id, which scopes the next request
    pub fn clear(&mut self) {
        self.id.clear();
        self.name.clear();
        self.quantity.clear();
        self.price.clear();
    }
}

/// A rendered result table (`search_shopcarts_results` / `search_items_results`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<ResultRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// DOM id of the `<tr>`, `row_{n}`
    pub id: String,
    pub cells: Vec<String>,
}

/// Everything the page shows. Controller functions take it by `&mut` and are
/// the only place it changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub shopcart: ShopcartFields,
    pub item: ItemFields,
    /// Empty string means the flash area is cleared
    pub flash: String,
    pub shopcart_results: Option<ResultTable>,
    pub item_results: Option<ResultTable>,
}

impl FormState {
    pub fn clear_flash(&mut self) {
        self.flash.clear();
    }

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = message.into();
    }
}

/// Named inputs of the page; the DOM id doubles as the field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ShopcartId,
    ShopcartName,
    ItemId,
    ItemShopcartId,
    ItemName,
    ItemQuantity,
    ItemPrice,
}

impl Field {
    pub fn dom_id(self) -> &'static str {
        match self {
            Field::ShopcartId => "shopcart_id",
            Field::ShopcartName => "shopcart_name",
            Field::ItemId => "item_id",
            Field::ItemShopcartId => "item_shopcart_id",
            Field::ItemName => "item_name",
            Field::ItemQuantity => "item_quantity",
            Field::ItemPrice => "item_price",
        }
    }

    fn slot(self, state: &mut FormState) -> &mut String {
        match self {
            Field::ShopcartId => &mut state.shopcart.id,
            Field::ShopcartName => &mut state.shopcart.name,
            Field::ItemId => &mut state.item.id,
            Field::ItemShopcartId => &mut state.item.shopcart_id,
            Field::ItemName => &mut state.item.name,
            Field::ItemQuantity => &mut state.item.quantity,
            Field::ItemPrice => &mut state.item.price,
        }
    }
}

impl FormState {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::ShopcartId => &self.shopcart.id,
            Field::ShopcartName => &self.shopcart.name,
            Field::ItemId => &self.item.id,
            Field::ItemShopcartId => &self.item.shopcart_id,
            Field::ItemName => &self.item.name,
            Field::ItemQuantity => &self.item.quantity,
            Field::ItemPrice => &self.item.price,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *field.slot(self) = value;
    }
}
