use maud::Markup;

use crate::pages;

pub async fn home() -> Markup {
    pages::home_page()
}
