use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::search_input::SearchInput;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

pub const LOGO_URL: &str = "https://i.postimg.cc/dts7TZmg/ARTBRASIL.png";

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="header">
            <div class="header__inner">
                <div class="header__brand">
                    <div class="header__logo">
                        <img src=LOGO_URL alt="Art Brasil" />
                    </div>
                    <div class="header__titles">
                        <span class="header__title">
                            "ART"<span class="header__title-accent">"BRASIL"</span>
                        </span>
                        <span class="header__tagline">"O PODER QUE VEM DA ARTE"</span>
                    </div>
                </div>

                <div class="header__actions">
                    <div class="header__search">
                        <SearchInput
                            value=ctx.search_term
                            on_change=Callback::new(move |term| ctx.set_search_term(term))
                            placeholder="Pesquisar..."
                        />
                    </div>

                    <ThemeToggle />

                    <button
                        class="icon-btn header__cart-btn"
                        title="Abrir carrinho"
                        on:click=move |_| ctx.open_cart()
                    >
                        {icon("cart")}
                        <Show when=move || (ctx.total_cart_items() > 0)>
                            <span class="header__cart-badge">
                                {move || ctx.total_cart_items()}
                            </span>
                        </Show>
                    </button>
                </div>
            </div>
        </header>
    }
}
