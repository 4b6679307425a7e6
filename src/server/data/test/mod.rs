mod article;
mod author;
mod conference;
mod edition;
mod researcher;
mod user;
