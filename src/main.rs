use cafe_menu_rust::menu::AppState;
use cafe_menu_rust::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize structured logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize application state with the two demo items
    let state = Arc::new(AppState::with_demo_items());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

#[cfg(test)]
mod tests {
    use cafe_menu_rust::menu::errors::MenuError;
    use cafe_menu_rust::menu::models::{Category, ListQuery, MenuItemRequest, Size};
    use cafe_menu_rust::menu::state::AppState;

    fn request(name: &str, price: f64, category: Category) -> MenuItemRequest {
        MenuItemRequest {
            name: name.to_string(),
            price,
            description: None,
            category,
            size: Size::Medium,
            available: true,
        }
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let state = AppState::new();

        let first = state.create(request("Espresso", 2.50, Category::Coffee));
        let second = state.create(request("Croissant", 3.25, Category::Pastry));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        // Deletion must not free the id for reuse
        state.delete(second.id).unwrap();
        let third = state.create(request("Scone", 2.80, Category::Pastry));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_get_returns_created_item() {
        let state = AppState::new();

        let created = state.create(request("Espresso", 2.50, Category::Coffee));
        let fetched = state.get(created.id).unwrap();
        assert_eq!(fetched, created);

        assert_eq!(state.get(99), Err(MenuError::NotFound(99)));
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let state = AppState::new();
        let created = state.create(MenuItemRequest {
            name: "Latte".to_string(),
            price: 3.50,
            description: Some("Espresso with steamed milk".to_string()),
            category: Category::Coffee,
            size: Size::Medium,
            available: true,
        });

        let updated = state
            .update(
                created.id,
                MenuItemRequest {
                    name: "Latte Deluxe".to_string(),
                    price: 4.50,
                    description: None,
                    category: Category::Coffee,
                    size: Size::Large,
                    available: false,
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Latte Deluxe");
        assert_eq!(updated.price, 4.50);
        assert_eq!(updated.description, None, "no partial-field merge");
        assert_eq!(updated.size, Size::Large);
        assert!(!updated.available);

        // Subsequent reads see exactly the replacement
        assert_eq!(state.get(created.id).unwrap(), updated);

        assert_eq!(
            state.update(42, request("Mocha", 4.00, Category::Coffee)),
            Err(MenuError::NotFound(42))
        );
    }

    #[test]
    fn test_delete_is_permanent() {
        let state = AppState::new();
        let created = state.create(request("Espresso", 2.50, Category::Coffee));

        state.delete(created.id).unwrap();
        assert_eq!(state.get(created.id), Err(MenuError::NotFound(created.id)));
        assert_eq!(
            state.delete(created.id),
            Err(MenuError::NotFound(created.id))
        );
    }

    #[test]
    fn test_list_unfiltered_is_ordered_by_id() {
        let state = AppState::new();
        state.create(request("Espresso", 2.50, Category::Coffee));
        state.create(request("Green Tea", 2.75, Category::Tea));
        state.create(request("Croissant", 3.25, Category::Pastry));

        let items = state.list(&ListQuery::default());
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_filters_combine_with_and() {
        let state = AppState::new();
        state.create(request("Espresso", 2.50, Category::Coffee));
        state.create(request("Latte", 3.50, Category::Coffee));
        state.create(request("Mocha", 4.00, Category::Coffee));
        state.create(request("Green Tea", 3.75, Category::Tea));

        let query = ListQuery {
            category: Some(Category::Coffee),
            min_price: Some(3.00),
            ..ListQuery::default()
        };
        let items = state.list(&query);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Latte", "Mocha"]);

        // min is inclusive
        let query = ListQuery {
            min_price: Some(3.50),
            max_price: Some(3.75),
            ..ListQuery::default()
        };
        let names: Vec<String> = state.list(&query).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Latte", "Green Tea"]);
    }

    #[test]
    fn test_list_availability_filter() {
        let state = AppState::new();
        state.create(request("Espresso", 2.50, Category::Coffee));
        let mut sold_out = request("Croissant", 3.25, Category::Pastry);
        sold_out.available = false;
        state.create(sold_out);

        let query = ListQuery {
            available: Some(false),
            ..ListQuery::default()
        };
        let items = state.list(&query);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Croissant");
    }

    #[test]
    fn test_demo_items_are_seeded() {
        let state = AppState::with_demo_items();

        let items = state.list(&ListQuery::default());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Latte");
        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].name, "Green Tea");

        // Seeding goes through create, so the sequence continues at 3
        let next = state.create(request("Mocha", 4.00, Category::Coffee));
        assert_eq!(next.id, 3);
    }
}
