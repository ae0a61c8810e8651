//! The interaction loop: menu, dispatch, display.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use stocktally_catalog::{Product, ProductCatalog, StockoutForecast};
use stocktally_core::{DomainError, ProductId};

use crate::input::{prompt_line, prompt_parsed};
use crate::menu::{BANNER, MENU, MenuChoice};

/// Run the menu loop until the operator confirms Exit or input ends.
///
/// Every operation runs to completion before the next prompt is shown. The
/// loop never terminates on a domain error; errors are printed and the menu
/// redisplays.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut ProductCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "{BANNER}")?;
        writeln!(output, "{MENU}")?;

        let Some(number) = prompt_parsed::<u32, _, _>(input, output, "Enter your choice: ")?
        else {
            return Ok(());
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            writeln!(output, "Invalid choice.")?;
            continue;
        };

        match choice {
            MenuChoice::AddProduct => add_product(catalog, input, output)?,
            MenuChoice::UpdateQuantity => update_quantity(catalog, input, output)?,
            MenuChoice::SellProduct => sell_product(catalog, input, output)?,
            MenuChoice::DisplayInventory => display_inventory(catalog, output)?,
            MenuChoice::PredictStockout => predict_stockout(catalog, input, output)?,
            MenuChoice::Exit => {
                let Some(confirm) =
                    prompt_line(input, output, "Are you sure you want to exit? (y/n): ")?
                else {
                    return Ok(());
                };
                if confirm.eq_ignore_ascii_case("y") {
                    writeln!(output, "Exiting...")?;
                    return Ok(());
                }
                writeln!(output, "Resuming...")?;
            }
        }
    }
}

fn add_product<R: BufRead, W: Write>(
    catalog: &mut ProductCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(id) = prompt_line(input, output, "Enter product id: ")? else {
        return Ok(());
    };
    let Some(name) = prompt_line(input, output, "Enter product name: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_parsed::<i64, _, _>(input, output, "Enter product quantity: ")?
    else {
        return Ok(());
    };
    let Some(cost) = prompt_parsed::<Decimal, _, _>(input, output, "Enter product cost: ")? else {
        return Ok(());
    };
    let Some(sell_price) =
        prompt_parsed::<Decimal, _, _>(input, output, "Enter product sell price: ")?
    else {
        return Ok(());
    };

    catalog.add(Product::new(id, name, quantity, cost, sell_price));
    writeln!(output, "Product added successfully.")
}

fn update_quantity<R: BufRead, W: Write>(
    catalog: &mut ProductCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(id) = prompt_line(input, output, "Enter product id of product to update: ")? else {
        return Ok(());
    };
    let Some(delta) = prompt_parsed::<i64, _, _>(input, output, "Enter new quantity: ")? else {
        return Ok(());
    };

    // Success writes an activity-log line; the console stays quiet.
    if let Err(err) = catalog.adjust_quantity(&ProductId::from(id), delta) {
        print_error(output, &err)?;
    }
    Ok(())
}

fn sell_product<R: BufRead, W: Write>(
    catalog: &mut ProductCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(id) = prompt_line(input, output, "Enter product id of product to sell: ")? else {
        return Ok(());
    };
    let Some(units) = prompt_parsed::<i64, _, _>(input, output, "Enter quantity to sell: ")? else {
        return Ok(());
    };

    match catalog.sell(&ProductId::from(id), units) {
        Ok(sale) => writeln!(output, "Sold {} units of {}.", sale.units, sale.product_name)?,
        Err(err) => print_error(output, &err)?,
    }
    Ok(())
}

fn display_inventory<W: Write>(catalog: &ProductCatalog, output: &mut W) -> io::Result<()> {
    writeln!(output, "Inventory:")?;
    for item in catalog.list_all() {
        writeln!(
            output,
            "Name: {}, ID: {}, Quantity: {}, Orders Sold: {}",
            item.name, item.id, item.quantity, item.orders_sold
        )?;
    }
    Ok(())
}

fn predict_stockout<R: BufRead, W: Write>(
    catalog: &ProductCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(id) = prompt_line(input, output, "Enter product id of product to predict stockout: ")?
    else {
        return Ok(());
    };

    match catalog.predict_stockout(&ProductId::from(id)) {
        Ok(report) => match report.outcome {
            StockoutForecast::NoSalesHistory => writeln!(
                output,
                "Product {} (ID: {}) has no sales recorded; stockout cannot be estimated.",
                report.product_name, report.product_id
            )?,
            StockoutForecast::RunsOutInDays(days) => writeln!(
                output,
                "Product {} (ID: {}) is expected to run out in approximately {} days.",
                report.product_name, report.product_id, days
            )?,
            StockoutForecast::AlreadyOut => writeln!(
                output,
                "Product {} (ID: {}) is already out of stock.",
                report.product_name, report.product_id
            )?,
        },
        Err(err) => print_error(output, &err)?,
    }
    Ok(())
}

/// Map a domain error to its operator-facing message.
fn print_error<W: Write>(output: &mut W, err: &DomainError) -> io::Result<()> {
    match err {
        DomainError::NotFound => writeln!(output, "Product not found."),
        DomainError::InsufficientStock { name, .. } => {
            writeln!(output, "Insufficient quantity of {name} in stock.")
        }
        DomainError::Validation(msg) => writeln!(output, "Invalid input: {msg}."),
    }
}
