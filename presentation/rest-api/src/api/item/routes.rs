use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::patch::{PatchItemParams, PatchItemUseCase};
use business::domain::item::use_cases::replace::{ReplaceItemParams, ReplaceItemUseCase};
use business::domain::shared::value_objects::{ItemId, Page};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ItemRequest, ItemResponse};
use crate::api::tags::ApiTags;

fn default_limit() -> u64 {
    Page::DEFAULT_LIMIT as u64
}

pub(crate) fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    replace_use_case: Arc<dyn ReplaceItemUseCase>,
    patch_use_case: Arc<dyn PatchItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        replace_use_case: Arc<dyn ReplaceItemUseCase>,
        patch_use_case: Arc<dyn PatchItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            replace_use_case,
            patch_use_case,
            delete_use_case,
        }
    }
}

/// Item catalog API
///
/// Endpoints for creating, listing, updating and soft-deleting items.
#[OpenApi]
impl ItemApi {
    /// Create an item
    ///
    /// Adds a new live item to the catalog and assigns it the next id.
    #[oai(path = "/item", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<ItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            name: body.0.name,
            price: body.0.price,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => {
                let location = format!("/item/{}", item.id);
                CreateItemResponse::Created(Json(item.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List items
    ///
    /// Takes the `[offset, offset + limit)` window of the catalog first and
    /// then filters it, so fewer than `limit` items may come back.
    #[oai(path = "/item", method = "get", tag = "ApiTags::Items")]
    async fn get_all_items(
        &self,
        #[oai(default)] offset: Query<u64>,
        #[oai(default = "default_limit", validator(minimum(value = "1")))] limit: Query<u64>,
        #[oai(validator(minimum(value = "0")))] min_price: Query<Option<f64>>,
        #[oai(validator(minimum(value = "0")))] max_price: Query<Option<f64>>,
        #[oai(default)] show_deleted: Query<bool>,
    ) -> GetAllItemsResponse {
        let params = GetAllItemsParams {
            offset: to_usize(offset.0),
            limit: to_usize(limit.0),
            min_price: min_price.0,
            max_price: max_price.0,
            show_deleted: show_deleted.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllItemsResponse::BadRequest(json),
                    _ => GetAllItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item by ID
    ///
    /// Deleted items are reported as not found.
    #[oai(path = "/item/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item_by_id(&self, id: Path<u64>) -> GetItemByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetItemByIdParams {
                id: ItemId::new(id.0),
            })
            .await
        {
            Ok(item) => GetItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemByIdResponse::NotFound(json),
                    _ => GetItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace an item
    ///
    /// Overwrites name and price of a live item.
    #[oai(path = "/item/:id", method = "put", tag = "ApiTags::Items")]
    async fn replace_item(&self, id: Path<u64>, body: Json<ItemRequest>) -> ReplaceItemResponse {
        let params = ReplaceItemParams {
            id: ItemId::new(id.0),
            name: body.0.name,
            price: body.0.price,
        };

        match self.replace_use_case.execute(params).await {
            Ok(item) => ReplaceItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ReplaceItemResponse::BadRequest(json),
                    404 => ReplaceItemResponse::NotFound(json),
                    _ => ReplaceItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Patch an item
    ///
    /// Accepts any subset of `name` and `price`. Other fields, including
    /// `deleted`, reject the whole request. Fields are checked in the order the
    /// client sent them and the first offending one decides the error.
    /// Patching a deleted item changes nothing and answers 304.
    #[oai(path = "/item/:id", method = "patch", tag = "ApiTags::Items")]
    async fn patch_item(
        &self,
        id: Path<u64>,
        body: Json<serde_json::Value>,
    ) -> PatchItemResponse {
        let serde_json::Value::Object(fields) = body.0 else {
            return PatchItemResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "item.invalid_body",
            )));
        };
        let params = PatchItemParams {
            id: ItemId::new(id.0),
            fields,
        };

        match self.patch_use_case.execute(params).await {
            Ok(item) => PatchItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    304 => PatchItemResponse::NotModified,
                    400 => PatchItemResponse::BadRequest(json),
                    404 => PatchItemResponse::NotFound(json),
                    422 => PatchItemResponse::UnprocessableEntity(json),
                    _ => PatchItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Soft-deletes the item and returns it. Deleting twice is not an error.
    #[oai(path = "/item/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<u64>) -> DeleteItemResponse {
        match self
            .delete_use_case
            .execute(DeleteItemParams {
                id: ItemId::new(id.0),
            })
            .await
        {
            Ok(item) => DeleteItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>, #[oai(header = "location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReplaceItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PatchItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    /// The item is deleted; nothing was changed.
    #[oai(status = 304)]
    NotModified,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
