use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use business::domain::shared::value_objects::{CartId, ItemId, Page};

use crate::api::cart::dto::CartResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::routes::to_usize;
use crate::api::tags::ApiTags;

fn default_limit() -> u64 {
    Page::DEFAULT_LIMIT as u64
}

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_all_use_case: Arc<dyn GetAllCartsUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    add_item_use_case: Arc<dyn AddItemToCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_all_use_case: Arc<dyn GetAllCartsUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        add_item_use_case: Arc<dyn AddItemToCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            add_item_use_case,
        }
    }
}

/// Cart API
#[OpenApi]
impl CartApi {
    /// Create an empty cart
    ///
    /// Returns the new cart id; the cart itself is at the `location` header.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(id) => CreateCartResponse::Created(Json(id.value()), format!("/cart/{}", id)),
            Err(err) => {
                let (_, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// List carts
    ///
    /// The window is taken before the price and quantity filters run.
    /// Quantity bounds apply to the total units in a cart.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Carts")]
    async fn get_all_carts(
        &self,
        #[oai(default)] offset: Query<u64>,
        #[oai(default = "default_limit", validator(minimum(value = "1")))] limit: Query<u64>,
        #[oai(validator(minimum(value = "0")))] min_price: Query<Option<f64>>,
        #[oai(validator(minimum(value = "0")))] max_price: Query<Option<f64>>,
        min_quantity: Query<Option<u64>>,
        max_quantity: Query<Option<u64>>,
    ) -> GetAllCartsResponse {
        let params = GetAllCartsParams {
            offset: to_usize(offset.0),
            limit: to_usize(limit.0),
            min_price: min_price.0,
            max_price: max_price.0,
            min_quantity: min_quantity.0,
            max_quantity: max_quantity.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(carts) => {
                let responses: Vec<CartResponse> = carts.into_iter().map(|c| c.into()).collect();
                GetAllCartsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllCartsResponse::BadRequest(json),
                    _ => GetAllCartsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a cart by ID
    #[oai(path = "/cart/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_by_id(&self, id: Path<u64>) -> GetCartByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetCartByIdParams {
                id: CartId::new(id.0),
            })
            .await
        {
            Ok(cart) => GetCartByIdResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartByIdResponse::NotFound(json),
                    _ => GetCartByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Add one unit of an item to a cart
    ///
    /// Adding an item that is already in the cart bumps its quantity.
    /// The cart price grows by the item's price at this moment.
    #[oai(
        path = "/cart/:cart_id/add/:item_id",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_item(&self, cart_id: Path<u64>, item_id: Path<u64>) -> AddItemToCartResponse {
        let params = AddItemToCartParams {
            cart_id: CartId::new(cart_id.0),
            item_id: ItemId::new(item_id.0),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => AddItemToCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddItemToCartResponse::NotFound(json),
                    _ => AddItemToCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<u64>, #[oai(header = "location")] String),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCartsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    /// Either the cart or the item does not exist.
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use crate::setup::{dependency_injection::DependencyContainer, server::Server};

    fn client() -> TestClient<impl poem::Endpoint> {
        TestClient::new(Server::routes(DependencyContainer::new()))
    }

    async fn create_item(cli: &TestClient<impl poem::Endpoint>, name: &str, price: f64) {
        cli.post("/item")
            .body_json(&json!({"name": name, "price": price}))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn should_create_cart_and_return_its_id() {
        let cli = client();

        let resp = cli.post("/cart").send().await;

        resp.assert_status(StatusCode::CREATED);
        resp.assert_header("location", "/cart/1");
        resp.assert_json(1).await;
    }

    #[tokio::test]
    async fn should_accumulate_quantity_for_repeated_item() {
        let cli = client();
        create_item(&cli, "Soap", 1.5).await;
        cli.post("/cart").send().await.assert_status(StatusCode::CREATED);

        cli.post("/cart/1/add/1").send().await.assert_status_is_ok();
        let resp = cli.post("/cart/1/add/1").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("quantity").assert_i64(2);
        cart.get("price").assert_f64(3.0);
        let items = cart.get("items").array();
        items.assert_len(1);
        items.get(0).object().get("quantity").assert_i64(2);
    }

    #[tokio::test]
    async fn should_keep_price_paid_after_item_changes() {
        let cli = client();
        create_item(&cli, "Soap", 1.5).await;
        cli.post("/cart").send().await.assert_status(StatusCode::CREATED);
        cli.post("/cart/1/add/1").send().await.assert_status_is_ok();

        cli.put("/item/1")
            .body_json(&json!({"name": "Fancy Soap", "price": 4.0}))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli.get("/cart/1").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("price").assert_f64(1.5);
        cart.get("items")
            .array()
            .get(0)
            .object()
            .get("name")
            .assert_string("Soap");
    }

    #[tokio::test]
    async fn should_report_missing_cart_or_item() {
        let cli = client();
        create_item(&cli, "Soap", 1.5).await;

        cli.post("/cart/1/add/1")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);

        cli.post("/cart").send().await.assert_status(StatusCode::CREATED);
        cli.post("/cart/1/add/2")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);

        cli.delete("/item/1").send().await.assert_status_is_ok();
        let resp = cli.post("/cart/1/add/1").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);

        let resp = cli.get("/cart/1").send().await;
        resp.json().await.value().object().get("quantity").assert_i64(0);
    }

    #[tokio::test]
    async fn should_filter_carts_by_total_quantity() {
        let cli = client();
        create_item(&cli, "Soap", 1.0).await;
        create_item(&cli, "Towel", 2.0).await;
        for _ in 0..2 {
            cli.post("/cart").send().await.assert_status(StatusCode::CREATED);
        }
        cli.post("/cart/1/add/1").send().await.assert_status_is_ok();
        cli.post("/cart/2/add/1").send().await.assert_status_is_ok();
        cli.post("/cart/2/add/2").send().await.assert_status_is_ok();

        let resp = cli.get("/cart").query("min_quantity", &2).send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let carts = json.value().array();
        carts.assert_len(1);
        carts.get(0).object().get("id").assert_i64(2);

        let resp = cli.get("/cart").query("max_price", &1.5).send().await;
        let json = resp.json().await;
        let carts = json.value().array();
        carts.assert_len(1);
        carts.get(0).object().get("id").assert_i64(1);
    }
}
