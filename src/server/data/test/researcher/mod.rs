use crate::server::{
    data::researcher::ResearcherRepository,
    model::{
        page::PageParam,
        researcher::{FullNameParam, ResearcherFilter, ResearcherParam},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_full_name;
mod get_paginated;

fn all() -> PageParam {
    PageParam { index: 0, size: 50 }
}
