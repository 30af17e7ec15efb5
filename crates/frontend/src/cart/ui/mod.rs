//! Cart views: the drawer with checkout form, and the floating cart button.

use contracts::domain::CartLine;
use contracts::shared::money::format_brl_display;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::link_opener::{submit_order, WindowLinkOpener};

/// Right-hand drawer over the page. Closes on overlay click, the close
/// button, or Escape.
///
/// Stays mounted while closed (rendering nothing) so the delivery form keeps
/// whatever the customer already typed.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let ctx = use_app_context();

    let (customer_name, set_customer_name) = signal(String::new());
    let (customer_phone, set_customer_phone) = signal(String::new());

    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    ctx.close_cart();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let form_incomplete = move || {
        customer_name.get().trim().is_empty() || customer_phone.get().trim().is_empty()
    };

    let handle_checkout = move |_| {
        let result = ctx.cart.with_untracked(|cart| {
            submit_order(
                cart,
                &customer_name.get_untracked(),
                &customer_phone.get_untracked(),
                &WindowLinkOpener,
            )
        });
        if let Err(err) = result {
            log::warn!("checkout rejected: {err}");
        }
    };

    let line_count_label = move || {
        let n = ctx.cart.with(|cart| cart.line_count());
        let noun = if n == 1 {
            "item selecionado"
        } else {
            "itens selecionados"
        };
        format!("{n} {noun}")
    };

    view! {
        <Show when=move || ctx.cart_open.get()>
            <div class="cart-drawer">
                <div class="cart-drawer__overlay" on:click=move |_| ctx.close_cart()></div>

                <aside class="cart-drawer__panel">
                    <div class="cart-drawer__header">
                        <div class="cart-drawer__headings">
                            <h2 class="cart-drawer__title">"Seu Carrinho"</h2>
                            <p class="cart-drawer__count">{line_count_label}</p>
                        </div>
                        <button
                            class="icon-btn cart-drawer__close"
                            title="Fechar"
                            on:click=move |_| ctx.close_cart()
                        >
                            {icon("x")}
                        </button>
                    </div>

                    <div class="cart-drawer__content">
                        <Show
                            when=move || !ctx.cart.with(|cart| cart.is_empty())
                            fallback=move || {
                                view! {
                                    <div class="cart-empty">
                                        <div class="cart-empty__icon">{icon("cart")}</div>
                                        <p class="cart-empty__title">"Puxa, está vazio!"</p>
                                        <p class="cart-empty__text">
                                            "Escolha suas obras favoritas para começar o pedido."
                                        </p>
                                        <button
                                            class="cart-empty__browse"
                                            on:click=move |_| ctx.close_cart()
                                        >
                                            "Explorar Vitrine"
                                        </button>
                                    </div>
                                }
                            }
                        >
                            <div class="cart-drawer__lines">
                                <For
                                    each=move || ctx.cart.with(|cart| cart.lines().to_vec())
                                    key=|line| (line.product.id, line.quantity)
                                    children=move |line: CartLine| {
                                        view! { <CartLineRow line=line /> }
                                    }
                                />
                            </div>

                            <div class="cart-form">
                                <div class="cart-form__heading">
                                    <span class="cart-form__bar"></span>
                                    <h3>"Informações de Entrega"</h3>
                                </div>

                                <label class="cart-form__label">"Seu Nome"</label>
                                <input
                                    type="text"
                                    class="cart-form__input"
                                    placeholder="Ex: João Silva"
                                    prop:value=move || customer_name.get()
                                    on:input=move |ev| set_customer_name.set(event_target_value(&ev))
                                />

                                <label class="cart-form__label">"WhatsApp de Contato"</label>
                                <input
                                    type="tel"
                                    class="cart-form__input"
                                    placeholder="(91) 00000-0000"
                                    prop:value=move || customer_phone.get()
                                    on:input=move |ev| set_customer_phone.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>
                    </div>

                    <Show when=move || !ctx.cart.with(|cart| cart.is_empty())>
                        <div class="cart-drawer__footer">
                            <div class="cart-drawer__total-row">
                                <span class="cart-drawer__total-label">"Subtotal do pedido"</span>
                                <span class="cart-drawer__total">
                                    {move || ctx.cart.with(|cart| format_brl_display(cart.total_price()))}
                                </span>
                            </div>

                            <button
                                class="cart-drawer__checkout"
                                prop:disabled=form_incomplete
                                on:click=handle_checkout
                            >
                                {icon("message-circle")}
                                "Enviar para WhatsApp"
                            </button>

                            {move || if form_incomplete() {
                                view! {
                                    <p class="cart-drawer__warning">
                                        "⚠️ Por favor, preencha seus dados acima"
                                    </p>
                                }.into_any()
                            } else {
                                view! {
                                    <p class="cart-drawer__hint">
                                        "Entre em contato para frete e prazos"
                                    </p>
                                }.into_any()
                            }}
                        </div>
                    </Show>
                </aside>
            </div>
        </Show>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let ctx = use_app_context();
    let id = line.product.id;

    view! {
        <div class="cart-line">
            <div class="cart-line__thumb">
                {match line.product.image_url.clone() {
                    Some(url) => view! {
                        <img class="cart-line__img" src=url alt=line.product.name.clone() />
                    }.into_any(),
                    None => view! {
                        <span class="cart-line__thumb-placeholder">{icon("cart")}</span>
                    }.into_any(),
                }}
            </div>

            <div class="cart-line__info">
                <div class="cart-line__top">
                    <h4 class="cart-line__name">{line.product.name.clone()}</h4>
                    <button
                        class="cart-line__remove"
                        title="Remover"
                        on:click=move |_| ctx.remove_item(id)
                    >
                        {icon("trash")}
                    </button>
                </div>

                <p class="cart-line__size">{format!("{} cm", line.product.size)}</p>

                <div class="cart-line__bottom">
                    <div class="cart-line__stepper">
                        <button
                            class="cart-line__step"
                            on:click=move |_| ctx.update_quantity(id, -1)
                        >
                            {icon("minus")}
                        </button>
                        <span class="cart-line__qty">{line.quantity}</span>
                        <button
                            class="cart-line__step"
                            on:click=move |_| ctx.update_quantity(id, 1)
                        >
                            {icon("plus")}
                        </button>
                    </div>
                    <span class="cart-line__subtotal">
                        {format_brl_display(line.subtotal())}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Shortcut back into the cart, shown only while it has items.
#[component]
pub fn FloatingCartButton() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || (ctx.total_cart_items() > 0)>
            <button
                class="floating-cart"
                title="Abrir carrinho"
                on:click=move |_| ctx.open_cart()
            >
                {icon("cart")}
                <span class="floating-cart__badge">{move || ctx.total_cart_items()}</span>
            </button>
        </Show>
    }
}
