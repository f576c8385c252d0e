//! Walkthrough of a day at the counter
//!
//! Registers a customer, orders two drinks, moves the order through its
//! lifecycle and leaves a review. Data goes to `./demo-data` unless
//! `TEAHOUSE_CONFIG` points at a YAML file.
//!
//! ```sh
//! RUST_LOG=teahouse=debug cargo run --example walkthrough
//! ```

use anyhow::Result;
use teahouse::prelude::*;
use teahouse::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init("teahouse=info,walkthrough=info")?;

    let mut config = match std::env::var("TEAHOUSE_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::json_in("demo-data"),
    };
    config.notifications.sink = NotificationSink::EventBus;

    let shop = Teahouse::open(&config).await?;

    // Print every notification as it is published
    if let Some(bus) = shop.events() {
        let mut rx = bus.subscribe();
        tokio::spawn(async move {
            while let Ok(envelope) = rx.recv().await {
                println!(
                    "  [notify] {} for order {}",
                    envelope.event.action(),
                    envelope.event.order_id()
                );
            }
        });
    }

    let jasmine = shop
        .menu
        .create_item(NewMenuItem::new("Jasmine green", Decimal::new(1200, 2), "tea"))
        .await?;
    let brown_sugar = shop
        .menu
        .create_item(
            NewMenuItem::new("Brown sugar milk", Decimal::new(1600, 2), "milk tea")
                .description("Slow-cooked tapioca, fresh milk"),
        )
        .await?;
    let pearl = shop
        .menu
        .create_topping(NewTopping::new("Pearl", Decimal::new(300, 2)))
        .await?;

    let now = Utc::now();
    shop.promotions
        .create_promotion(
            "Second cup half price",
            "Weekdays before noon",
            now,
            now + chrono::Duration::days(7),
        )
        .await?;

    println!("Menu:");
    for item in shop.menu.list_items().await {
        println!("  {:<20} {:>6}", item.name, item.price);
    }
    for promo in shop.promotions.list_active().await {
        println!("Promotion: {}", promo.title);
    }

    let phone = "13512345678";
    let registered = Outcome::from_result(
        shop.auth.register(Registration::new("Wang", phone)).await,
        "registered",
    );
    println!("Register: {} ({})", registered.message, registered.success);

    let session = shop.auth.login(phone).await?;
    let user_id = session.user_id();
    println!("Logged in as {}", session.user.nickname);

    shop.carts
        .add_to_cart(&user_id, AddToCart::new(jasmine.item_id, 1).sweetness(Sweetness::None))
        .await?;
    let cart = shop
        .carts
        .add_to_cart(
            &user_id,
            AddToCart::new(brown_sugar.item_id, 2)
                .sweetness(Sweetness::Three)
                .toppings([pearl.topping_id])
                .remark("less ice"),
        )
        .await?;
    println!("Cart total: {}", cart.total());

    let order = shop.orders.place_order(&user_id, "pickup at 12:30").await?;
    println!("Placed order {} for {}", order.order_id(), order.total_amount());

    for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Completed] {
        let order = shop.orders.update_status(&order.order_id(), status).await?;
        println!("Order is now {}", order.status());
    }

    let review = shop
        .reviews
        .create_review(&user_id, &order.order_id(), 5, "Perfect sweetness")
        .await?;
    shop.reviews.reply_review(&review.review_id, "See you tomorrow!").await?;
    if !shop.favorites.is_favorited(&user_id, &brown_sugar.item_id).await {
        shop.favorites.add_favorite(&user_id, &brown_sugar.item_id).await?;
    }

    println!(
        "{} order(s), {} favorite(s)",
        shop.orders.list_orders(Some(&user_id)).await.len(),
        shop.favorites.list_favorites(&user_id).await.len()
    );

    shop.auth.logout(session);
    tokio::task::yield_now().await;
    Ok(())
}
