//! Storefront page composition.
//!
//! One page: header, mobile search, category tabs, product grid, footer, and
//! the cart drawer overlaying everything when open.

use crate::cart::ui::{CartDrawer, FloatingCartButton};
use crate::catalog::ui::{CategoryTabs, ProductGrid};
use crate::layout::footer::Footer;
use crate::layout::global_context::use_app_context;
use crate::layout::header::Header;
use crate::shared::search_input::SearchInput;
use leptos::prelude::*;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page">
            <Header />

            <main class="page__main">
                // Search box shown below the header on small screens only.
                <div class="page__mobile-search">
                    <SearchInput
                        value=ctx.search_term
                        on_change=Callback::new(move |term| ctx.set_search_term(term))
                        placeholder="Pesquisar estátuas..."
                    />
                </div>

                <CategoryTabs />
                <ProductGrid />
            </main>

            <Footer />

            // Always mounted so the delivery form keeps its contents across
            // open/close; the drawer renders nothing while closed.
            <CartDrawer />

            <FloatingCartButton />
        </div>
    }
}
