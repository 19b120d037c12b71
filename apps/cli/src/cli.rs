//! # Command-Line Interface
//!
//! Argument definitions and output rendering for the `shopsync` binary.
//!
//! ## Screens → Subcommands
//! ```text
//! Product list (tabs)     shopsync products [--category Home]
//! Product detail          shopsync product 7
//! Add product form        shopsync add --name .. --price .. --stock .. --category ..
//! Edit product form       shopsync update 7 --price 24.50
//! Detail +/- buttons      shopsync stock 7 --delta 1 --delta -1
//! Delete button           shopsync delete 7
//! Category tabs           shopsync categories
//! Login / Register        shopsync login | register | logout | whoami
//! Theme switch            shopsync theme [light|dark|toggle]
//! ```
//!
//! `--json` prints the DTOs instead of text lines, for scripting.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::commands::{auth, category, product, theme};
use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::App;
use shopsync_core::{ColorScheme, ProductForm, User};

/// ShopSync local catalog
#[derive(Debug, Parser)]
#[command(name = "shopsync")]
#[command(about = "Manage the local ShopSync product catalog")]
#[command(version)]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Database file (overrides SHOPSYNC_DB_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Do not insert example products into an empty catalog
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, newest first
    Products {
        /// Only this category ("All" lists everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one product
    Product {
        /// Product id
        id: i64,
    },

    /// Add a product
    Add(AddArgs),

    /// Edit a product; omitted fields keep their current value
    Update(UpdateArgs),

    /// Change the stock count
    Stock(StockArgs),

    /// Delete a product
    Delete {
        /// Product id
        id: i64,
    },

    /// List categories
    Categories {
        /// Include the leading "All" tab
        #[arg(long)]
        tabs: bool,
    },

    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Must equal --password
        #[arg(long)]
        confirm: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show or change the color scheme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    /// Unit price, greater than zero
    #[arg(long)]
    pub price: String,
    /// Units on hand, zero or more
    #[arg(long)]
    pub stock: String,
    #[arg(long)]
    pub category: String,
    /// Image reference (e.g. file:///...)
    #[arg(long)]
    pub image: Option<String>,
}

impl From<AddArgs> for ProductForm {
    fn from(args: AddArgs) -> Self {
        ProductForm {
            name: args.name,
            price: args.price,
            stock: args.stock,
            category: args.category,
            image_uri: args.image,
        }
    }
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Product id
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub stock: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, conflicts_with = "no_image")]
    pub image: Option<String>,
    /// Remove the image
    #[arg(long)]
    pub no_image: bool,
}

impl UpdateArgs {
    /// Overlays the given fields on the current form values.
    fn apply_to(self, mut form: ProductForm) -> ProductForm {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
        if let Some(stock) = self.stock {
            form.stock = stock;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if self.no_image {
            form.image_uri = None;
        } else if let Some(image) = self.image {
            form.image_uri = Some(image);
        }
        form
    }
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("change").required(true).args(["set", "delta"])))]
pub struct StockArgs {
    /// Product id
    pub id: i64,
    /// New absolute count
    #[arg(long, allow_negative_numbers = true)]
    pub set: Option<i64>,
    /// Relative change, repeatable; the result never drops below zero
    #[arg(long, allow_negative_numbers = true)]
    pub delta: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

// =============================================================================
// Dispatch
// =============================================================================

/// Runs one parsed command against initialized state.
pub async fn execute(app: &App, command: Command, json: bool) -> Result<(), ApiError> {
    let out = Output { json };

    match command {
        Command::Products { category } => {
            let products = product::list_products(&app.db, category.as_deref()).await?;
            out.products(&products)
        }
        Command::Product { id } => out.product(&product::get_product(&app.db, id).await?),
        Command::Add(args) => {
            let created = product::create_product(&app.db, args.into()).await?;
            out.product(&created)
        }
        Command::Update(args) => {
            let current = product::get_product(&app.db, args.id).await?;
            let id = args.id;
            let form = args.apply_to(current.to_form());
            out.product(&product::update_product(&app.db, id, form).await?)
        }
        Command::Stock(args) => {
            let updated = match args.set {
                Some(stock) => product::set_stock(&app.db, args.id, stock).await?,
                None => product::adjust_stock(&app.db, args.id, &args.delta).await?,
            };
            out.product(&updated)
        }
        Command::Delete { id } => {
            product::delete_product(&app.db, id).await?;
            out.message(&serde_json::json!({ "deleted": id }), &format!("Deleted product {}", id))
        }
        Command::Categories { tabs } => {
            let names = if tabs {
                category::list_category_tabs(&app.db).await?
            } else {
                category::list_categories(&app.db).await?
            };
            out.lines(&names)
        }
        Command::Login { email, password } => {
            out.user(&auth::login(&app.db, &app.session, &email, &password).await?)
        }
        Command::Register {
            email,
            password,
            confirm,
        } => out.user(&auth::register(&app.db, &app.session, &email, &password, &confirm).await?),
        Command::Logout => {
            auth::logout(&app.db, &app.session).await?;
            out.message(&serde_json::json!({ "signedIn": false }), "Signed out")
        }
        Command::Whoami => out.user(&auth::current_user(&app.session).await?),
        Command::Theme { action } => {
            let scheme = match action {
                None => theme::get_theme(&app.theme).await,
                Some(ThemeAction::Light) => theme::set_theme(&app.db, &app.theme, ColorScheme::Light).await?,
                Some(ThemeAction::Dark) => theme::set_theme(&app.db, &app.theme, ColorScheme::Dark).await?,
                Some(ThemeAction::Toggle) => theme::toggle_theme(&app.db, &app.theme).await?,
            };
            out.message(&scheme, scheme.as_str())
        }
    }
}

// =============================================================================
// Output
// =============================================================================

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<(), ApiError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    fn products(&self, products: &[ProductDto]) -> Result<(), ApiError> {
        self.emit(&products, || {
            if products.is_empty() {
                return "No products".to_string();
            }
            products.iter().map(product_line).collect::<Vec<_>>().join("\n")
        })
    }

    fn product(&self, product: &ProductDto) -> Result<(), ApiError> {
        self.emit(product, || product_line(product))
    }

    fn lines(&self, values: &[String]) -> Result<(), ApiError> {
        self.emit(&values, || values.join("\n"))
    }

    fn user(&self, user: &User) -> Result<(), ApiError> {
        self.emit(user, || match user.signed_in_at {
            Some(at) => format!("{} (since {})", user.email, at.format("%Y-%m-%d %H:%M UTC")),
            None => user.email.clone(),
        })
    }

    fn message<T: Serialize>(&self, value: &T, text: &str) -> Result<(), ApiError> {
        self.emit(value, || text.to_string())
    }
}

fn product_line(p: &ProductDto) -> String {
    let stock = if p.in_stock {
        format!("{} in stock", p.stock)
    } else {
        "Out of Stock".to_string()
    };
    format!("#{:<4} {:<24} ${:>9.2}  {:<14} {}", p.id, p.name, p.price, p.category, stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_stock_accepts_negative_deltas() {
        let cli = Cli::try_parse_from(["shopsync", "stock", "5", "--delta", "-3", "--delta", "1"]).unwrap();
        match cli.command {
            Command::Stock(args) => {
                assert_eq!(args.id, 5);
                assert_eq!(args.delta, vec![-3, 1]);
                assert_eq!(args.set, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_stock_set_passes_negative_through() {
        // Rejected by set_stock as a validation error, not by the parser
        let cli = Cli::try_parse_from(["shopsync", "stock", "5", "--set", "-2"]).unwrap();
        match cli.command {
            Command::Stock(args) => {
                assert_eq!(args.set, Some(-2));
                assert!(args.delta.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_stock_requires_a_change() {
        assert!(Cli::try_parse_from(["shopsync", "stock", "5"]).is_err());
        assert!(Cli::try_parse_from(["shopsync", "stock", "5", "--set", "2", "--delta", "1"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shopsync", "products", "--json", "--db", "/tmp/x.db", "--no-seed"]).unwrap();
        assert!(cli.json);
        assert!(cli.no_seed);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
    }

    #[test]
    fn test_update_overlays_only_given_fields() {
        let args = UpdateArgs {
            id: 1,
            name: None,
            price: Some("24.50".into()),
            stock: None,
            category: None,
            image: None,
            no_image: true,
        };
        let current = ProductForm::new("Desk Lamp", "19.99", "10", "Home").with_image("file:///a.jpg");

        let form = args.apply_to(current);
        assert_eq!(form, ProductForm::new("Desk Lamp", "24.50", "10", "Home"));
    }

    #[test]
    fn test_product_line_marks_out_of_stock() {
        let dto = ProductDto {
            id: 3,
            name: "Modern Sofa".into(),
            price: 599.99,
            stock: 0,
            category: "Home".into(),
            image_uri: None,
            in_stock: false,
        };
        let line = product_line(&dto);
        assert!(line.contains("Modern Sofa"));
        assert!(line.contains("599.99"));
        assert!(line.ends_with("Out of Stock"));
    }
}
