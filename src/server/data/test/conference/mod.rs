use crate::server::{
    data::conference::ConferenceRepository,
    model::{
        conference::{ConferenceFilter, ConferenceParam},
        page::PageParam,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;

fn page(index: u64, size: u64) -> PageParam {
    PageParam { index, size }
}
