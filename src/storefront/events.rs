//! UI events and their routing to handlers.
//!
//! Rendered fragments carry `data-action`, `data-product-id` and, for
//! quantity buttons, `data-quantity`. [`UiEvent::from_action`] turns those
//! attributes back into an event; [`Storefront::dispatch`] runs its handler.

use super::forms::{LoginForm, RegisterForm};
use super::Storefront;
use crate::auth::ProfileUpdate;
use crate::domain::order::PaymentMethod;
use crate::shared::{Category, ProductId};
use crate::view::Modal;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    PageLoaded,

    // Session
    Login(LoginForm),
    Register(RegisterForm),
    Logout,
    OpenProfile,
    SaveProfile(ProfileUpdate),
    SendResetOtp { identifier: String },
    ResetPassword { otp: String, new_password: String },

    // Browsing
    SelectCategory(Category),
    ShowProduct(ProductId),
    Search(String),

    // Cart
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    UpdateQuantity { id: ProductId, quantity: i64 },
    OpenCart,
    ClearCart,

    // Wishlist
    ToggleWishlist(ProductId),
    OpenWishlist,

    // Checkout
    Checkout,
    SelectPaymentMethod(PaymentMethod),
    PlaceOrder,
    OpenOrders,

    // Chrome
    ShowModal(Modal),
    HideModal(Modal),
    SwitchModal { from: Modal, to: Modal },
    ToggleUserDropdown,
    ToggleChatbot,
    SendChat(String),
}

impl UiEvent {
    /// Variant name for logs. Payloads can hold passwords and are never logged.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::PageLoaded => "page_loaded",
            UiEvent::Login(_) => "login",
            UiEvent::Register(_) => "register",
            UiEvent::Logout => "logout",
            UiEvent::OpenProfile => "open_profile",
            UiEvent::SaveProfile(_) => "save_profile",
            UiEvent::SendResetOtp { .. } => "send_reset_otp",
            UiEvent::ResetPassword { .. } => "reset_password",
            UiEvent::SelectCategory(_) => "select_category",
            UiEvent::ShowProduct(_) => "show_product",
            UiEvent::Search(_) => "search",
            UiEvent::AddToCart(_) => "add_to_cart",
            UiEvent::RemoveFromCart(_) => "remove_from_cart",
            UiEvent::UpdateQuantity { .. } => "update_quantity",
            UiEvent::OpenCart => "open_cart",
            UiEvent::ClearCart => "clear_cart",
            UiEvent::ToggleWishlist(_) => "toggle_wishlist",
            UiEvent::OpenWishlist => "open_wishlist",
            UiEvent::Checkout => "checkout",
            UiEvent::SelectPaymentMethod(_) => "select_payment_method",
            UiEvent::PlaceOrder => "place_order",
            UiEvent::OpenOrders => "open_orders",
            UiEvent::ShowModal(_) => "show_modal",
            UiEvent::HideModal(_) => "hide_modal",
            UiEvent::SwitchModal { .. } => "switch_modal",
            UiEvent::ToggleUserDropdown => "toggle_user_dropdown",
            UiEvent::ToggleChatbot => "toggle_chatbot",
            UiEvent::SendChat(_) => "send_chat",
        }
    }

    /// Event for a click on a rendered element. `None` for unknown actions or
    /// missing attributes.
    pub fn from_action(action: &str, product_id: Option<&str>, quantity: Option<&str>) -> Option<Self> {
        if action == "checkout" {
            return Some(UiEvent::Checkout);
        }

        let id = product_id?.parse::<ProductId>().ok()?;
        match action {
            "toggle-wishlist" => Some(UiEvent::ToggleWishlist(id)),
            "show-product" => Some(UiEvent::ShowProduct(id)),
            "add-to-cart" => Some(UiEvent::AddToCart(id)),
            "remove-from-cart" => Some(UiEvent::RemoveFromCart(id)),
            "update-quantity" => {
                let quantity = quantity?.trim().parse::<i64>().ok()?;
                Some(UiEvent::UpdateQuantity { id, quantity })
            }
            _ => {
                tracing::debug!(action, "unknown action");
                None
            }
        }
    }
}

impl Storefront {
    /// Run the handler for `event`.
    pub async fn dispatch(&self, event: UiEvent) {
        tracing::debug!(event = event.name(), "dispatch");
        match event {
            UiEvent::PageLoaded => self.page_loaded().await,

            UiEvent::Login(form) => self.handle_login(form).await,
            UiEvent::Register(form) => self.handle_register(form).await,
            UiEvent::Logout => self.logout_user().await,
            UiEvent::OpenProfile => self.load_profile().await,
            UiEvent::SaveProfile(form) => self.update_profile(form).await,
            UiEvent::SendResetOtp { identifier } => {
                self.send_forgot_password_otp(&identifier).await
            }
            UiEvent::ResetPassword { otp, new_password } => {
                self.reset_password(&otp, &new_password).await
            }

            UiEvent::SelectCategory(category) => self.select_category(category).await,
            UiEvent::ShowProduct(id) => self.show_product_modal(id).await,
            UiEvent::Search(input) => self.search_products(&input).await,

            UiEvent::AddToCart(id) => self.add_to_cart(id).await,
            UiEvent::RemoveFromCart(id) => self.remove_from_cart(id).await,
            UiEvent::UpdateQuantity { id, quantity } => {
                self.update_cart_quantity(id, quantity).await
            }
            UiEvent::OpenCart => self.open_cart().await,
            UiEvent::ClearCart => self.clear_cart().await,

            UiEvent::ToggleWishlist(id) => self.toggle_wishlist(id).await,
            UiEvent::OpenWishlist => self.open_wishlist().await,

            UiEvent::Checkout => self.show_payment_modal().await,
            UiEvent::SelectPaymentMethod(method) => self.select_payment_method(method).await,
            UiEvent::PlaceOrder => self.process_payment().await,
            UiEvent::OpenOrders => self.open_orders().await,

            UiEvent::ShowModal(modal) => self.show_modal(modal).await,
            UiEvent::HideModal(modal) => self.hide_modal(modal).await,
            UiEvent::SwitchModal { from, to } => self.switch_modal(from, to).await,
            UiEvent::ToggleUserDropdown => self.toggle_user_dropdown().await,
            UiEvent::ToggleChatbot => self.toggle_chatbot().await,
            UiEvent::SendChat(text) => self.send_chat_message(&text).await,
        }
    }
}
