//! Parsing of shell input lines into storefront commands.

use shop_core::{CartIntent, CategoryFilter};
use thiserror::Error;

use crate::utils::{ParseInputError, parse_product_id, parse_quantity, parse_weight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A change to the cart state.
    Cart(CartIntent),
    /// Print the catalog for the current category.
    List,
    SetLogLevel(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'; type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Input(#[from] ParseInputError),
}

pub const HELP: &str = "\
add <id>              добавить одну штуку
remove <id>           убрать одну штуку
set <id> <qty>        задать количество
drop <id>             убрать товар из корзины
weight <id> <weight>  выбрать вес (250, 500г, 1 кг, 1.5кг, 2кг) или reset
category <name>       Все товары | Овощи | Фрукты
list                  показать товары
cart                  открыть корзину
close                 закрыть корзину
checkout              оформить заказ
log <level>           уровень логирования
help                  эта справка
quit                  выход";

/// Parses one input line. Command words are case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let name = words.next().ok_or(CommandError::Empty)?.to_lowercase();
    let args: Vec<&str> = words.collect();

    let command = match (name.as_str(), args.as_slice()) {
        ("add", [id]) => Command::Cart(CartIntent::Add(parse_product_id(id)?)),
        ("add", _) => return Err(CommandError::Usage("add <id>")),

        ("remove", [id]) => Command::Cart(CartIntent::Remove(parse_product_id(id)?)),
        ("remove", _) => return Err(CommandError::Usage("remove <id>")),

        ("set", [id, quantity]) => Command::Cart(CartIntent::SetQuantity {
            product_id: parse_product_id(id)?,
            quantity: parse_quantity(quantity)?,
        }),
        ("set", _) => return Err(CommandError::Usage("set <id> <qty>")),

        ("drop", [id]) => Command::Cart(CartIntent::RemoveItem(parse_product_id(id)?)),
        ("drop", _) => return Err(CommandError::Usage("drop <id>")),

        ("weight", [id, "reset"]) => Command::Cart(CartIntent::ClearWeight(parse_product_id(id)?)),
        ("weight", [id, weight @ ..]) if !weight.is_empty() => {
            Command::Cart(CartIntent::SelectWeight {
                product_id: parse_product_id(id)?,
                weight: parse_weight(&weight.join(" "))?,
            })
        }
        ("weight", _) => return Err(CommandError::Usage("weight <id> <weight>|reset")),

        ("category", [_, ..]) => {
            Command::Cart(CartIntent::SelectCategory(CategoryFilter::parse(&args.join(" "))))
        }
        ("category", []) => return Err(CommandError::Usage("category <name>")),

        ("cart", []) => Command::Cart(CartIntent::ShowCart),
        ("close", []) => Command::Cart(CartIntent::HideCart),
        ("checkout", []) => Command::Cart(CartIntent::Checkout),
        ("list", []) => Command::List,

        ("log", [level]) => Command::SetLogLevel(level.to_string()),
        ("log", _) => return Err(CommandError::Usage("log <level>")),

        ("help" | "?", _) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,

        ("cart" | "close" | "checkout" | "list" | "quit" | "exit", _) => {
            return Err(CommandError::Usage("command takes no arguments"));
        }
        (other, _) => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}
