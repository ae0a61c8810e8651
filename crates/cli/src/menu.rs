//! The fixed menu command set and its numeric encoding.

/// One operator command, keyed by menu number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    UpdateQuantity,
    SellProduct,
    DisplayInventory,
    PredictStockout,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to its command. Numbers outside 1..=6 are invalid.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::AddProduct),
            2 => Some(Self::UpdateQuantity),
            3 => Some(Self::SellProduct),
            4 => Some(Self::DisplayInventory),
            5 => Some(Self::PredictStockout),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub const BANNER: &str = "\
==============================================
   Welcome to the Retail Management System
==============================================";

pub const MENU: &str = "\
What would you like to do?
1. Add Product
2. Update Product Quantity
3. Sell Product
4. Display Inventory
5. Predict Stockout
6. Exit";
