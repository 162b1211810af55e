use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A parking allocation. Both payload columns are nullable at the storage layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "autos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub auto_id: i32,
    pub parking_name: Option<String>,
    pub parking_price: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// All rows, ascending by `auto_id`.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::AutoId).all(db).await?;
    Ok(rows)
}

pub async fn find<C: ConnectionTrait>(db: &C, auto_id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(auto_id).one(db).await?)
}

/// Insert a row and return it with its assigned `auto_id`.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    parking_name: Option<String>,
    parking_price: Option<f64>,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        parking_name: Set(parking_name),
        parking_price: Set(parking_price),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, auto_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(auto_id).exec(db).await?;
    Ok(res.rows_affected)
}
