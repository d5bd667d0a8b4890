use crate::facades::site;
use poem::{Route, get};

pub fn routes() -> Route {
    Route::new()
        .at("/", get(site::home))
        .at("/menu", get(site::menu))
        .at("/cart", get(site::cart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, select_by_category, select_popular};
    use crate::models::food::FoodItem;
    use crate::render::ViewRenderer;
    use minijinja::context;
    use poem::EndpointExt;
    use poem::http::StatusCode;
    use poem::test::TestClient;

    fn views() -> ViewRenderer {
        ViewRenderer::new(concat!(env!("CARGO_MANIFEST_DIR"), "/views"))
    }

    fn all_items() -> Vec<FoodItem> {
        let raw =
            std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/data/food.json"))
                .unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn client(store: CatalogStore) -> TestClient<impl poem::Endpoint> {
        TestClient::new(routes().data(store).data(views()))
    }

    fn real_store() -> CatalogStore {
        CatalogStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/food.json"))
    }

    #[tokio::test]
    async fn home_serves_the_popular_selection() {
        let expected = views()
            .render("home", context! { popular => select_popular(all_items()) })
            .unwrap();

        let resp = client(real_store()).get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(expected).await;
    }

    #[tokio::test]
    async fn menu_without_category_defaults_to_main() {
        let dishes = select_by_category(all_items(), "Main");
        let expected = views()
            .render("menu", context! { dishes => dishes, cat => "Main" })
            .unwrap();

        let resp = client(real_store()).get("/menu").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(expected).await;
    }

    #[tokio::test]
    async fn menu_filters_by_the_category_parameter() {
        let dishes = select_by_category(all_items(), "Dessert");
        let expected = views()
            .render("menu", context! { dishes => dishes, cat => "Dessert" })
            .unwrap();

        let resp = client(real_store())
            .get("/menu?category=Dessert")
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.assert_text(expected).await;
    }

    #[tokio::test]
    async fn menu_with_unknown_category_renders_an_empty_list() {
        let expected = views()
            .render(
                "menu",
                context! { dishes => Vec::<FoodItem>::new(), cat => "Sides" },
            )
            .unwrap();

        let resp = client(real_store())
            .get("/menu?category=Sides")
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.assert_text(expected).await;
    }

    #[tokio::test]
    async fn cart_applies_the_same_filtering_as_menu() {
        let dishes = select_by_category(all_items(), "Main");
        let expected = views()
            .render("cart", context! { dishes => dishes, cat => "Main" })
            .unwrap();

        let resp = client(real_store()).get("/cart").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(expected).await;
    }

    #[tokio::test]
    async fn every_route_faults_when_the_catalog_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("gone.json"));

        for path in ["/", "/menu", "/cart"] {
            let resp = client(store.clone()).get(path).send().await;
            resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
