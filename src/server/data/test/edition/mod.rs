use crate::server::{
    data::edition::EditionRepository,
    model::{
        edition::{EditionFilter, EditionParam},
        page::PageParam,
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn all() -> PageParam {
    PageParam { index: 0, size: 50 }
}
