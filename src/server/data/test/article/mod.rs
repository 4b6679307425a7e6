use crate::server::{
    data::article::ArticleRepository,
    model::{article::ArticleParam, page::PageParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_researcher;
mod update;
