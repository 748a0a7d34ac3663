//! # Storefront CLI
//!
//! Command-line front end for the bakery storefront. Each invocation
//! restores the stored session, runs one command and prints the toasts it
//! produced.

use clap::{Args, Parser, Subcommand};
use shared::{OrderStatus, PaymentMethod, RegisterRequest, StockMovement};
use std::process::ExitCode;
use storefront::app::ToastKind;
use storefront::pages::admin_reviews::ReviewFilter;
use storefront::pages::checkout::{CheckoutOutcome, PaymentPoll};
use storefront::pages::ingredients::{IngredientFilter, IngredientSort};
use storefront::pages::shop::SortOrder;
use storefront::pages::{orders, product, questions, AddToCart};
use storefront::{config, debug, AppError, Storefront};

/// Payment checks before `checkout --wait` gives up.
const PAYMENT_POLL_ATTEMPTS: u32 = 100;

#[derive(Parser)]
#[command(name = "storefront", version, about = "Sweet Bakery storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and remember the session
    Login {
        email: String,
        #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create a customer account
    Register {
        email: String,
        #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
    },
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Browse the catalog
    Products(ProductsArgs),
    /// Product details, rating and reviews
    Product {
        id: String,
        /// Add or remove the product from favourites
        #[arg(long)]
        toggle_favourite: bool,
        /// Leave a review: rating 1-5
        #[arg(long, requires = "comment")]
        rate: Option<u8>,
        #[arg(long)]
        comment: Option<String>,
    },
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Place an order for the cart
    Checkout(CheckoutArgs),
    Orders {
        #[command(subcommand)]
        action: Option<OrderAction>,
    },
    Favourites {
        #[command(subcommand)]
        action: Option<FavouriteAction>,
    },
    /// Ask the support assistant
    Chat {
        /// Message to send; without one the history is shown
        message: Vec<String>,
        #[arg(long)]
        clear: bool,
        #[arg(long)]
        suggestions: bool,
    },
    /// Send a question to the shop
    Ask {
        #[arg(long)]
        subject: String,
        #[arg(long, default_value = "Business Department")]
        department: String,
        question: Vec<String>,
    },
    /// Answers to your questions
    Inbox,
    /// Back-office commands
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Args)]
struct ProductsArgs {
    #[arg(long, default_value = "all")]
    category: String,
    /// default, price-low, price-high, name-az, name-za
    #[arg(long, default_value = "default")]
    sort: String,
    #[arg(long, default_value_t = 1)]
    page: usize,
    #[arg(long, default_value_t = 12)]
    per_page: usize,
    /// Add this product to the cart
    #[arg(long)]
    add: Option<String>,
}

#[derive(Subcommand)]
enum CartAction {
    Add {
        product_id: String,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    Set { product_id: String, quantity: u32 },
    Remove { product_id: String },
    Clear,
}

#[derive(Args)]
struct CheckoutArgs {
    #[arg(long)]
    address: String,
    /// Defaults to the profile phone
    #[arg(long)]
    phone: Option<String>,
    #[arg(long, default_value = "")]
    note: String,
    /// cod or payos
    #[arg(long, default_value = "cod")]
    payment: String,
    /// Keep checking until a payos payment arrives
    #[arg(long)]
    wait: bool,
}

#[derive(Subcommand)]
enum OrderAction {
    Show { order_id: String },
    Cancel { order_id: String },
    Delete { order_id: String },
}

#[derive(Subcommand)]
enum FavouriteAction {
    Add { product_id: String },
    Remove { product_id: String },
    /// Move a favourite into the cart
    Cart { product_id: String },
    Clear,
}

#[derive(Subcommand)]
enum AdminCommand {
    Products {
        #[command(subcommand)]
        action: Option<AdminProductAction>,
    },
    Ingredients {
        /// all, low-stock, active
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long, default_value = "")]
        search: String,
        /// name, quantity, price
        #[arg(long, default_value = "name")]
        sort: String,
        #[arg(long)]
        delete: Option<String>,
    },
    /// Import or export stock, or show the ledger
    Stock {
        #[command(subcommand)]
        action: StockAction,
    },
    Recipes {
        #[command(subcommand)]
        action: Option<RecipeAction>,
    },
    Reviews {
        /// pending, all, approved, hidden
        #[arg(long, default_value = "pending")]
        filter: String,
        #[arg(long)]
        approve: Option<String>,
        #[arg(long)]
        hide: Option<String>,
        #[arg(long)]
        delete: Option<String>,
    },
    Questions {
        /// Reply to this question
        #[arg(long, requires = "answer")]
        reply: Option<String>,
        #[arg(long)]
        answer: Option<String>,
    },
    Orders {
        #[arg(long)]
        status: Option<String>,
        /// Order id and new status
        #[arg(long, num_args = 2, value_names = ["ORDER_ID", "STATUS"])]
        set: Option<Vec<String>>,
    },
}

#[derive(Subcommand)]
enum AdminProductAction {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        image: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "")]
        badge: String,
    },
    Delete { product_id: String },
    Toggle { product_id: String },
}

#[derive(Subcommand)]
enum StockAction {
    Import {
        ingredient_id: String,
        quantity: f64,
        #[arg(long, default_value = "")]
        note: String,
    },
    Export {
        ingredient_id: String,
        quantity: f64,
        #[arg(long, default_value = "")]
        note: String,
    },
    History { ingredient_id: String },
}

#[derive(Subcommand)]
enum RecipeAction {
    Cost { product_id: String },
    Check {
        product_id: String,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    Deduct {
        product_id: String,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    Delete { product_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = debug::init();

    let config = config::load().map_err(anyhow::Error::msg)?;
    let app = Storefront::from_config(config);
    app.start().await;

    let result = run(&app, cli.command).await;
    if let Err(e) = &result {
        app.handle_error(e);
    }

    for toast in app.toasts.drain() {
        match toast.kind {
            ToastKind::Error | ToastKind::Warning => eprintln!("{} {}", toast.icon, toast.message),
            ToastKind::Success | ToastKind::Info => println!("{} {}", toast.icon, toast.message),
        }
    }

    Ok(if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn invalid(what: &str, raw: &str) -> AppError {
    AppError::Validation(format!("Unknown {what} '{raw}'"))
}

async fn run(app: &Storefront, command: Command) -> storefront::Result<()> {
    match command {
        Command::Login { email, password } => {
            let user = app.login(&email, &password).await?;
            println!("Logged in as {} ({})", user.full_name, user.role.as_str());
        }
        Command::Register {
            email,
            password,
            name,
            phone,
        } => {
            app.auth
                .register(RegisterRequest {
                    email,
                    password,
                    full_name: name,
                    phone,
                })
                .await?;
            app.toasts.success("Account created. Please login.");
        }
        Command::Logout => app.logout(),
        Command::Whoami => match app.auth.user() {
            Some(user) => println!("{} <{}> {} [{}]", user.full_name, user.email, user.phone, user.role.as_str()),
            None => println!("Not logged in"),
        },
        Command::Products(args) => products(app, args).await?,
        Command::Product {
            id,
            toggle_favourite,
            rate,
            comment,
        } => {
            let mut page = app.product();
            let item = page.load(&id).await?.clone();
            println!("{} ${:.2} [{}]", item.name, item.price, item.category);
            println!(
                "{} {:.1} ({} reviews){}",
                product::stars(page.rating.avg_rating),
                page.rating.avg_rating,
                page.rating.total_reviews,
                if page.is_favourite { " ♥" } else { "" }
            );
            if !item.description.is_empty() {
                println!("{}", item.description);
            }
            if let Some(story) = &page.story {
                println!("{}", story.story);
            }
            for review in &page.reviews {
                println!(
                    "  {} {}: {}",
                    "★".repeat(review.rating as usize),
                    review.author(),
                    review.comment.as_deref().unwrap_or("")
                );
            }
            if toggle_favourite {
                page.toggle_favourite().await?;
            }
            if let (Some(rating), Some(comment)) = (rate, comment) {
                page.submit_review(rating, &comment).await?;
            }
        }
        Command::Cart { action } => cart_command(app, action).await?,
        Command::Checkout(args) => checkout(app, args).await?,
        Command::Orders { action } => orders_command(app, action).await?,
        Command::Favourites { action } => favourites(app, action).await?,
        Command::Chat {
            message,
            clear,
            suggestions,
        } => {
            let mut widget = app.chat();
            if clear {
                widget.clear_history().await?;
            }
            if suggestions {
                for suggestion in widget.suggestions().await? {
                    println!("» {suggestion}");
                }
            }
            let text = message.join(" ");
            if text.trim().is_empty() {
                for msg in widget.open().await? {
                    println!("[{:?}] {}", msg.role, msg.content);
                }
            } else {
                widget.open().await?;
                if let Some(reply) = widget.send(&text).await? {
                    println!("{}", reply.content);
                }
            }
        }
        Command::Ask {
            subject,
            department,
            question,
        } => {
            let mut page = app.contact();
            page.form.subject = subject;
            page.form.department = department;
            page.form.question = question.join(" ");
            page.submit().await?;
        }
        Command::Inbox => {
            let mut page = app.notifications();
            let list = page.load().await?;
            if list.is_empty() {
                println!("No questions yet");
            }
            for q in list {
                println!("{} [{}] {}: {}", questions::answer_label(q), q.department, q.subject, q.question);
                if let Some(answer) = &q.answer {
                    println!("    ↳ {answer}");
                }
            }
        }
        Command::Admin { command } => admin(app, command).await?,
    }
    Ok(())
}

async fn products(app: &Storefront, args: ProductsArgs) -> storefront::Result<()> {
    let mut page = app.shop();
    page.load().await?;
    if let Some(product_id) = args.add {
        if let AddToCart::LoginRequired = page.add_to_cart(&product_id).await? {
            println!("Please login to add products to your cart");
        }
        return Ok(());
    }

    page.set_category(&args.category);
    page.set_sort(SortOrder::parse(&args.sort).ok_or_else(|| invalid("sort", &args.sort))?);
    page.set_per_page(args.per_page);
    page.set_page(args.page);

    let counts: Vec<String> = page
        .categories()
        .iter()
        .map(|c| format!("{} ({})", c.name, c.count))
        .collect();
    println!("{}", counts.join(" | "));
    for item in page.visible() {
        let badge = item.badge.as_deref().map(|b| format!(" [{b}]")).unwrap_or_default();
        println!("{:<26} {:<32} ${:>7.2}{}", item.id, item.name, item.price, badge);
    }
    let (from, to, total) = page.showing();
    println!("Showing {from}-{to} of {total} (page {}/{})", page.page(), page.total_pages());
    Ok(())
}

async fn cart_command(app: &Storefront, action: Option<CartAction>) -> storefront::Result<()> {
    let page = app.cart_page();
    match action {
        Some(CartAction::Add { product_id, quantity }) => {
            let added = app.cart.add(&product_id, quantity).await?;
            app.toasts.success(added.message);
        }
        Some(CartAction::Set { product_id, quantity }) => page.set_quantity(&product_id, quantity).await?,
        Some(CartAction::Remove { product_id }) => page.remove(&product_id).await?,
        Some(CartAction::Clear) => page.clear().await?,
        None => {}
    }

    if page.requires_login() {
        println!("Please login to see your cart");
        return Ok(());
    }
    let lines = page.lines();
    if lines.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }
    for line in &lines {
        println!(
            "{:<26} {:<32} {:>3} x ${:.2} = ${:.2}",
            line.product.id,
            line.product.name,
            line.quantity,
            line.product.price,
            line.line_total()
        );
    }
    let total = page.total();
    println!("Subtotal ${:.2}  Shipping {}  Total ${:.2}", total.subtotal, page.shipping_label(), total.total);
    if let Some(note) = page.free_shipping_note() {
        println!("{note}");
    }
    Ok(())
}

async fn checkout(app: &Storefront, args: CheckoutArgs) -> storefront::Result<()> {
    let mut page = app.checkout();
    page.form.shipping_address = args.address;
    if let Some(phone) = args.phone {
        page.form.phone = phone;
    }
    page.form.note = args.note;
    page.form.payment_method = PaymentMethod::parse(&args.payment).ok_or_else(|| invalid("payment method", &args.payment))?;

    let outcome = page.submit().await?;
    let order = outcome.order();
    println!("Order {} placed: ${:.2} ({} items)", order.id, order.total_amount, order.item_count());

    if let CheckoutOutcome::AwaitingPayment { order, payment } = &outcome {
        println!("Pay at {}", payment.payment_url);
        if args.wait {
            let interval = app.config().payment_poll_interval();
            if page.poll_payment(&order.id, interval, PAYMENT_POLL_ATTEMPTS).await? == PaymentPoll::TimedOut {
                app.toasts.warning("Payment not received yet");
            }
        }
    }
    Ok(())
}

async fn orders_command(app: &Storefront, action: Option<OrderAction>) -> storefront::Result<()> {
    let mut page = app.my_orders();
    match action {
        Some(OrderAction::Show { order_id }) => {
            let mut success = app.order_success();
            match success.load(&order_id).await? {
                Some(order) => {
                    println!("Order {} {} {}", order.id, order.status.label(), orders::format_order_date(order));
                    for item in &order.items {
                        println!("  {} x{} ${:.2}", item.name, item.quantity, item.price);
                    }
                    println!("Total ${:.2}  {}", order.total_amount, orders::payment_label(&order.payment_status));
                }
                None => println!("Order not found"),
            }
            return Ok(());
        }
        Some(OrderAction::Cancel { order_id }) => {
            page.load().await?;
            page.cancel(&order_id).await?;
        }
        Some(OrderAction::Delete { order_id }) => {
            page.load().await?;
            page.delete(&order_id).await?;
        }
        None => {
            page.load().await?;
        }
    }

    if page.orders.is_empty() {
        println!("No orders yet");
    }
    for order in &page.orders {
        println!(
            "{:<26} {:<10} {:<12} ${:>8.2}  {}",
            order.id,
            order.status.label(),
            orders::payment_label(&order.payment_status),
            order.total_amount,
            orders::format_order_date(order)
        );
    }
    Ok(())
}

async fn favourites(app: &Storefront, action: Option<FavouriteAction>) -> storefront::Result<()> {
    let mut page = app.favourites();
    match action {
        Some(FavouriteAction::Add { product_id }) => {
            let mut detail = app.product();
            detail.load(&product_id).await?;
            if !detail.is_favourite {
                detail.toggle_favourite().await?;
            }
        }
        Some(FavouriteAction::Remove { product_id }) => page.remove(&product_id).await?,
        Some(FavouriteAction::Cart { product_id }) => {
            page.add_to_cart(&product_id).await?;
        }
        Some(FavouriteAction::Clear) => page.clear().await?,
        None => {}
    }

    for fav in page.load().await? {
        println!("{:<26} {:<32} ${:.2}", fav.product.id, fav.product.name, fav.product.price);
    }
    Ok(())
}

async fn admin(app: &Storefront, command: AdminCommand) -> storefront::Result<()> {
    match command {
        AdminCommand::Products { action } => {
            let mut page = app.admin_products();
            page.load().await?;
            match action {
                Some(AdminProductAction::Add {
                    name,
                    category,
                    price,
                    image,
                    description,
                    badge,
                }) => {
                    page.form.name = name;
                    page.form.category = category;
                    page.form.price = price;
                    page.form.image = image;
                    page.form.description = description;
                    page.form.badge = badge;
                    page.submit().await?;
                }
                Some(AdminProductAction::Delete { product_id }) => page.delete(&product_id).await?,
                Some(AdminProductAction::Toggle { product_id }) => {
                    page.toggle_availability(&product_id).await?;
                }
                None => {}
            }
            for item in &page.products {
                println!(
                    "{:<26} {:<32} {:<18} ${:>7.2} {}",
                    item.id,
                    item.name,
                    item.category,
                    item.price,
                    if item.is_available { "available" } else { "hidden" }
                );
            }
        }
        AdminCommand::Ingredients {
            filter,
            search,
            sort,
            delete,
        } => {
            let mut page = app.ingredients();
            page.load().await?;
            if let Some(id) = delete {
                page.delete(&id).await?;
            }
            page.filter = IngredientFilter::parse(&filter).ok_or_else(|| invalid("filter", &filter))?;
            page.sort = IngredientSort::parse(&sort).ok_or_else(|| invalid("sort", &sort))?;
            page.search = search;
            for item in page.visible() {
                println!(
                    "{:<26} {:<24} {:>9.2} {:<5} (min {}) ${:.2}/{}{}",
                    item.id,
                    item.name,
                    item.quantity,
                    item.unit,
                    item.min_quantity,
                    item.price_per_unit,
                    item.unit,
                    if item.is_low_stock { "  LOW" } else { "" }
                );
            }
            let summary = page.summary();
            println!(
                "{} ingredients, {} low on stock, {} active, stock value ${:.2}",
                summary.total, summary.low_stock, summary.active, summary.stock_value
            );
        }
        AdminCommand::Stock { action } => {
            let mut page = app.ingredients();
            match action {
                StockAction::Import {
                    ingredient_id,
                    quantity,
                    note,
                } => {
                    let item = page.change_stock(&ingredient_id, StockMovement::Import, quantity, &note).await?;
                    println!("{}: {} {}", item.name, item.quantity, item.unit);
                }
                StockAction::Export {
                    ingredient_id,
                    quantity,
                    note,
                } => {
                    let item = page.change_stock(&ingredient_id, StockMovement::Export, quantity, &note).await?;
                    println!("{}: {} {}", item.name, item.quantity, item.unit);
                }
                StockAction::History { ingredient_id } => {
                    for entry in page.history(&ingredient_id).await? {
                        println!(
                            "{} {:<6} {:>+9.2} ({} -> {}) {}",
                            entry.created_at.format("%Y-%m-%d %H:%M"),
                            entry.movement.as_str(),
                            entry.delta(),
                            entry.before,
                            entry.after,
                            entry.note
                        );
                    }
                }
            }
        }
        AdminCommand::Recipes { action } => {
            let mut page = app.recipes();
            match action {
                Some(RecipeAction::Cost { product_id }) => {
                    let cost = page.cost(&product_id).await?;
                    println!("Total cost ${:.2}", cost.total_cost);
                }
                Some(RecipeAction::Check { product_id, quantity }) => {
                    let check = page.check_ingredients(&product_id, quantity).await?;
                    println!("{}", if check.available { "Enough stock" } else { "Not enough stock" });
                }
                Some(RecipeAction::Deduct { product_id, quantity }) => {
                    page.deduct(&product_id, quantity).await?;
                }
                Some(RecipeAction::Delete { product_id }) => {
                    page.load().await?;
                    if !page.delete(&product_id).await? {
                        println!("No recipe for this product");
                    }
                }
                None => {
                    page.load().await?;
                    for item in &page.products {
                        let recipe = page
                            .recipe_for(&item.id)
                            .map(|r| format!("{} ingredients, {} min", r.ingredients.len(), r.total_time()))
                            .unwrap_or_else(|| "no recipe".to_string());
                        println!("{:<26} {:<32} {}", item.id, item.name, recipe);
                    }
                }
            }
        }
        AdminCommand::Reviews {
            filter,
            approve,
            hide,
            delete,
        } => {
            let mut page = app.admin_reviews();
            page.filter = ReviewFilter::parse(&filter).ok_or_else(|| invalid("filter", &filter))?;
            if let Some(id) = approve {
                page.approve(&id).await?;
            } else if let Some(id) = hide {
                page.hide(&id).await?;
            } else if let Some(id) = delete {
                page.delete(&id).await?;
            } else {
                page.load().await?;
            }
            for review in &page.reviews {
                println!(
                    "{:<26} {:<9} {} {}: {}",
                    review.id,
                    review.moderation_label(),
                    "★".repeat(review.rating as usize),
                    review.author(),
                    review.comment.as_deref().unwrap_or("")
                );
            }
        }
        AdminCommand::Questions { reply, answer } => {
            let mut page = app.admin_questions();
            match (reply, answer) {
                (Some(id), Some(answer)) => {
                    if !page.reply(&id, &answer).await? {
                        println!("Empty answer ignored");
                    }
                }
                _ => {
                    page.load().await?;
                }
            }
            for q in &page.questions {
                println!("{:<26} {} [{}] {}: {}", q.id, questions::answer_label(q), q.department, q.subject, q.question);
                if let Some(answer) = &q.answer {
                    println!("    ↳ {answer}");
                }
            }
        }
        AdminCommand::Orders { status, set } => {
            let mut page = app.admin_orders();
            if let Some(raw) = status {
                page.status = Some(OrderStatus::parse(&raw).ok_or_else(|| invalid("status", &raw))?);
            }
            if let Some([order_id, raw]) = set.as_deref() {
                let status = OrderStatus::parse(raw).ok_or_else(|| invalid("status", raw))?;
                page.update_status(order_id, status).await?;
            } else {
                page.load().await?;
            }
            for order in &page.orders {
                println!(
                    "{:<26} {:<10} ${:>8.2} {} {}",
                    order.id,
                    order.status.label(),
                    order.total_amount,
                    order.phone,
                    orders::format_order_date(order)
                );
            }
            if let Some(stats) = &page.stats {
                println!(
                    "{} orders: {} pending, {} paid, {} confirmed, {} shipping, {} delivered, {} cancelled",
                    stats.total, stats.pending, stats.paid, stats.confirmed, stats.shipping, stats.delivered, stats.cancelled
                );
            }
        }
    }
    Ok(())
}
