//! Catalog views: category tabs, product grid and cards.

use contracts::domain::{CategoryFilter, Product};
use contracts::shared::money::format_brl_display;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;

/// One pill per category, "Todos" first. Clicking a pill narrows the grid.
#[component]
pub fn CategoryTabs() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="category-tabs">
            {CategoryFilter::all().into_iter().map(|filter| {
                let is_active = move || ctx.active_category.get() == filter;
                view! {
                    <button
                        class=move || {
                            if is_active() {
                                "category-tab category-tab--active"
                            } else {
                                "category-tab"
                            }
                        }
                        on:click=move |_| ctx.set_category(filter)
                    >
                        {filter.display_name()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// The grid of visible products, or the empty state with a filter reset.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || !ctx.filtered_products().is_empty()
            fallback=move || {
                view! {
                    <div class="grid-empty">
                        <div class="grid-empty__icon">{icon("search")}</div>
                        <p class="grid-empty__text">"Ops! Nenhum produto encontrado."</p>
                        <button
                            class="grid-empty__reset"
                            on:click=move |_| ctx.reset_filters()
                        >
                            "Ver todos os produtos"
                        </button>
                    </div>
                }
            }
        >
            <div class="product-grid">
                <For
                    each=move || ctx.filtered_products()
                    key=|product| product.id
                    children=move |product: Product| {
                        view! { <ProductCard product=product /> }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();

    let price_label = format_brl_display(product.price);
    let add_to_cart = {
        let product = product.clone();
        move |_| ctx.add_to_cart(&product)
    };

    view! {
        <div class="product-card">
            <div class="product-card__media">
                {match product.image_url.clone() {
                    Some(url) => view! {
                        <img
                            class="product-card__img"
                            src=url
                            alt=product.name.clone()
                            loading="lazy"
                        />
                    }.into_any(),
                    None => view! {
                        <div class="product-card__placeholder">
                            {icon("image")}
                            <span class="product-card__placeholder-label">"Sem Imagem"</span>
                        </div>
                    }.into_any(),
                }}
                <span class="product-card__size">{format!("{} cm", product.size)}</span>
            </div>

            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__kind">"Escultura Religiosa"</p>

                <div class="product-card__footer">
                    <div class="product-card__pricing">
                        <span class="product-card__price-hint">"A partir de"</span>
                        <span class="product-card__price">{price_label}</span>
                    </div>
                    <button
                        class="product-card__add"
                        title="Adicionar ao carrinho"
                        on:click=add_to_cart
                    >
                        {icon("plus")}
                    </button>
                </div>
            </div>
        </div>
    }
}
