//! Pages
//!
//! One view-model per route. Each owns its local state for as long as it is
//! mounted and drives the transport on its own; pages never share state.
//!
//! ## Lifecycle
//!
//! 1. [`Page::mount`] picks the page for a route
//! 2. [`Page::activate`] runs the page's load effect once
//! 3. The caller forwards edits/submits to the concrete page

mod create;
mod detail;
mod edit;
mod form;
mod list;

pub use create::CreateForm;
pub use detail::DetailView;
pub use edit::EditForm;
pub use form::{FormPhase, FormState};
pub use list::{ListRow, ListView};

use crate::routes::Route;
use crate::transport::RecordTransport;

/// The page mounted for the current route
#[derive(Debug)]
pub enum Page {
    List(ListView),
    Create(CreateForm),
    Edit(EditForm),
    Detail(DetailView),
}

impl Page {
    /// Mount a fresh page for a route
    pub fn mount(route: &Route) -> Self {
        match route {
            Route::List => Page::List(ListView::new()),
            Route::Add => Page::Create(CreateForm::new()),
            Route::Edit(id) => Page::Edit(EditForm::new(id.clone())),
            Route::View(id) => Page::Detail(DetailView::new(id.clone())),
        }
    }

    /// Run the fetch-on-mount effect
    pub async fn activate(&mut self, transport: &dyn RecordTransport) {
        match self {
            Page::List(view) => view.load(transport).await,
            Page::Create(_) => {}
            Page::Edit(form) => form.load(transport).await,
            Page::Detail(view) => view.load(transport).await,
        }
    }

    /// Mount and activate in one step
    pub async fn open(route: &Route, transport: &dyn RecordTransport) -> Self {
        let mut page = Self::mount(route);
        page.activate(transport).await;
        page
    }

    /// Route this page is mounted at
    pub fn route(&self) -> Route {
        match self {
            Page::List(_) => Route::List,
            Page::Create(_) => Route::Add,
            Page::Edit(form) => Route::Edit(form.id().clone()),
            Page::Detail(view) => Route::View(view.id().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordId, StudentRecord};
    use crate::transport::memory::{Call, MemoryTransport};

    #[test]
    fn test_mount_dispatches_one_page_per_route() {
        assert!(matches!(Page::mount(&Route::List), Page::List(_)));
        assert!(matches!(Page::mount(&Route::Add), Page::Create(_)));
        assert!(matches!(
            Page::mount(&Route::Edit(RecordId::Number(1))),
            Page::Edit(_)
        ));
        assert!(matches!(
            Page::mount(&Route::View(RecordId::Number(1))),
            Page::Detail(_)
        ));
    }

    #[tokio::test]
    async fn test_activate_runs_each_load_effect_once() {
        let transport =
            MemoryTransport::with_records(vec![StudentRecord::new(1, "Ana", "CS", "ana@x.com")]);

        for path in ["/", "/addstudent", "/editstudent/1", "/viewstudent/1"] {
            let route = Route::parse(path).unwrap();
            let page = Page::open(&route, &transport).await;
            assert_eq!(page.route(), route);
        }

        // The create form fetches nothing
        assert_eq!(
            transport.calls(),
            vec![
                Call::List,
                Call::Get(RecordId::Number(1)),
                Call::Get(RecordId::Number(1)),
            ]
        );
    }

    #[tokio::test]
    async fn test_edit_and_detail_show_the_same_fields() {
        let transport =
            MemoryTransport::with_records(vec![StudentRecord::new(7, "Eve", "Bio", "eve@x.com")]);
        let id = RecordId::Number(7);

        let Page::Edit(edit) = Page::open(&Route::Edit(id.clone()), &transport).await else {
            panic!("expected edit page");
        };
        let Page::Detail(detail) = Page::open(&Route::View(id), &transport).await else {
            panic!("expected detail page");
        };

        let record = detail.record().unwrap();
        assert_eq!(edit.draft().name, record.name);
        assert_eq!(edit.draft().branch, record.branch);
        assert_eq!(edit.draft().mail, record.mail);
    }
}
