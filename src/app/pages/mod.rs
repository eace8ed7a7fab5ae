pub mod analysis;
pub mod not_found;
pub mod profile;
pub mod routes;
pub mod table_list;

pub use analysis::Analysis;
pub use not_found::NotFound;
pub use profile::Profile;
pub use table_list::TableList;

use dioxus::prelude::*;

use crate::domain::models::{PageRef, RouteParams};

/// Page registry: the component behind each route table entry
pub fn render_page(page: PageRef, params: &RouteParams) -> Element {
    match page {
        PageRef::Analysis => rsx! { Analysis {} },
        PageRef::TableList => rsx! { TableList {} },
        PageRef::Profile => {
            let id = params.get("id").cloned().unwrap_or_default();
            rsx! { Profile { id } }
        }
        PageRef::NotFound => rsx! { NotFound {} },
    }
}
