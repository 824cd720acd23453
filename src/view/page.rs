//! `Page`: the storefront's visible state.

use std::collections::{BTreeSet, HashMap};

use askama::Template;
use chrono::{DateTime, Utc};

use super::render::{
    CartItemsTemplate, CartLine, CartSummaryTemplate, ChatBubble, ChatLogTemplate,
    MessageTemplate, OrderView, OrdersTemplate, PaymentSummaryTemplate, ProductCard,
    ProductDetailTemplate, ProductGridTemplate, SearchResult, SearchResultsTemplate,
};
use super::{
    Badge, ForgotStep, Modal, Notification, NotificationKind, Region, RegionContent, UserMenu,
    WishlistButtons,
};
use crate::auth::{ProfileUpdate, User};
use crate::domain::cart::{Cart, CartTotals};
use crate::domain::chat::ChatMessage;
use crate::domain::order::PaymentMethod;
use crate::shared::{rupees, Category};

/// Notifications kept for [`Page::notifications`]; older ones are dropped.
pub const NOTIFICATION_HISTORY: usize = 20;

/// Cart modal furniture around the item list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartPanel {
    pub empty_visible: bool,
    /// `None` hides the summary.
    pub totals: Option<CartTotals>,
    pub checkout_enabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    open_modals: BTreeSet<Modal>,
    regions: HashMap<Region, RegionContent>,
    buttons: WishlistButtons,
    cart_panel: CartPanel,
    wishlist_empty_visible: bool,
    search_visible: bool,
    user_menu: UserMenu,
    user_dropdown_open: bool,
    cart_badge: Badge,
    wishlist_badge: Badge,
    notifications: Vec<Notification>,
    loading: u32,
    chatbot_open: bool,
    chat_log: Vec<ChatMessage>,
    active_category: Option<Category>,
    payment_method: Option<PaymentMethod>,
    forgot_step: ForgotStep,
    profile_form: ProfileUpdate,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Modals ───────────────────────────────────────────────────────────

    pub fn show_modal(&mut self, modal: Modal) {
        self.open_modals.insert(modal);
    }

    pub fn hide_modal(&mut self, modal: Modal) {
        self.open_modals.remove(&modal);
        if modal == Modal::ForgotPassword {
            self.forgot_step = ForgotStep::EnterIdentifier;
        }
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.open_modals.contains(&modal)
    }

    pub fn open_modals(&self) -> impl Iterator<Item = Modal> + '_ {
        self.open_modals.iter().copied()
    }

    /// Close `from` and open `to` (login ↔ register, login → forgot password).
    pub fn switch_modal(&mut self, from: Modal, to: Modal) {
        self.hide_modal(from);
        self.show_modal(to);
    }

    // ── Regions ──────────────────────────────────────────────────────────

    pub fn set_region(&mut self, region: Region, content: RegionContent) {
        self.regions.insert(region, content);
    }

    pub fn region(&self, region: Region) -> &RegionContent {
        static BLANK: RegionContent = RegionContent::Blank;
        self.regions.get(&region).unwrap_or(&BLANK)
    }

    /// HTML for a region, with wishlist buttons taken from the current index.
    pub fn render_region(&self, region: Region) -> Result<String, askama::Error> {
        match self.region(region) {
            RegionContent::Blank => Ok(String::new()),
            RegionContent::Products(products) => ProductGridTemplate {
                cards: products
                    .iter()
                    .map(|p| ProductCard::new(p, self.buttons.is_in_wishlist(p.id)))
                    .collect(),
            }
            .render(),
            RegionContent::SearchResults(products) => SearchResultsTemplate {
                results: products.iter().map(SearchResult::from).collect(),
            }
            .render(),
            RegionContent::CartLines(items) => CartItemsTemplate {
                lines: items.iter().map(CartLine::from).collect(),
            }
            .render(),
            RegionContent::ProductDetail(product) => {
                ProductDetailTemplate::new(product, self.buttons.is_in_wishlist(product.id))
                    .render()
            }
            RegionContent::Orders(orders) => OrdersTemplate {
                orders: orders.iter().map(OrderView::from).collect(),
            }
            .render(),
            RegionContent::PaymentSummary { total } => PaymentSummaryTemplate {
                total: total.clone(),
            }
            .render(),
            RegionContent::Message(message) => MessageTemplate::from(message).render(),
        }
    }

    pub fn buttons(&self) -> &WishlistButtons {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut WishlistButtons {
        &mut self.buttons
    }

    // ── Cart and wishlist panels ─────────────────────────────────────────

    /// Re-render the cart modal from the mirror.
    pub fn show_cart(&mut self, cart: &Cart) {
        if cart.is_empty() {
            self.set_region(Region::CartItems, RegionContent::Blank);
            self.cart_panel = CartPanel {
                empty_visible: true,
                totals: None,
                checkout_enabled: false,
            };
            return;
        }
        self.set_region(Region::CartItems, RegionContent::CartLines(cart.items().to_vec()));
        self.cart_panel = CartPanel {
            empty_visible: false,
            totals: Some(cart.totals()),
            checkout_enabled: true,
        };
    }

    pub fn cart_panel(&self) -> CartPanel {
        self.cart_panel
    }

    pub fn render_cart_summary(&self) -> Result<String, askama::Error> {
        match &self.cart_panel.totals {
            Some(totals) => CartSummaryTemplate::new(totals, self.cart_panel.checkout_enabled).render(),
            None => Ok(String::new()),
        }
    }

    /// The total currently shown in the cart summary, `₹0` when hidden.
    pub fn displayed_cart_total(&self) -> String {
        self.cart_panel
            .totals
            .map(|t| rupees(&t.total))
            .unwrap_or_else(|| rupees(&rust_decimal::Decimal::ZERO))
    }

    pub fn set_wishlist_empty_visible(&mut self, visible: bool) {
        self.wishlist_empty_visible = visible;
    }

    pub fn wishlist_empty_visible(&self) -> bool {
        self.wishlist_empty_visible
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub fn show_search_results(&mut self, content: RegionContent) {
        self.set_region(Region::SearchResults, content);
        self.search_visible = true;
    }

    pub fn clear_search(&mut self) {
        self.set_region(Region::SearchResults, RegionContent::Blank);
        self.search_visible = false;
    }

    pub fn is_search_visible(&self) -> bool {
        self.search_visible
    }

    // ── Header ───────────────────────────────────────────────────────────

    pub fn set_user(&mut self, user: Option<&User>) {
        self.user_menu = UserMenu::from_user(user);
        if user.is_none() {
            self.user_dropdown_open = false;
        }
    }

    pub fn user_menu(&self) -> &UserMenu {
        &self.user_menu
    }

    pub fn toggle_user_dropdown(&mut self) {
        self.user_dropdown_open = !self.user_dropdown_open;
    }

    pub fn is_user_dropdown_open(&self) -> bool {
        self.user_dropdown_open
    }

    pub fn set_counts(&mut self, cart_count: u32, wishlist_count: u32) {
        self.cart_badge.count = cart_count;
        self.wishlist_badge.count = wishlist_count;
    }

    pub fn cart_badge(&self) -> Badge {
        self.cart_badge
    }

    pub fn wishlist_badge(&self) -> Badge {
        self.wishlist_badge
    }

    // ── Notifications ────────────────────────────────────────────────────

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notify_at(kind, message, Utc::now());
    }

    pub fn notify_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: DateTime<Utc>) {
        self.notifications.push(Notification {
            kind,
            message: message.into(),
            shown_at: now,
        });
        if self.notifications.len() > NOTIFICATION_HISTORY {
            let excess = self.notifications.len() - NOTIFICATION_HISTORY;
            self.notifications.drain(..excess);
        }
    }

    /// The notification on screen at `now`: the newest one, while its TTL lasts.
    pub fn visible_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notifications
            .last()
            .filter(|n| n.is_visible_at(now))
    }

    /// The newest notification, visible or not.
    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// The most recent notifications, oldest first, at most
    /// [`NOTIFICATION_HISTORY`].
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    // ── Loading overlay ──────────────────────────────────────────────────

    pub fn begin_loading(&mut self) {
        self.loading += 1;
    }

    pub fn end_loading(&mut self) {
        self.loading = self.loading.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.loading > 0
    }

    // ── Chat widget ──────────────────────────────────────────────────────

    pub fn toggle_chatbot(&mut self) {
        self.chatbot_open = !self.chatbot_open;
    }

    pub fn is_chatbot_open(&self) -> bool {
        self.chatbot_open
    }

    pub fn push_chat(&mut self, message: ChatMessage) {
        self.chat_log.push(message);
    }

    pub fn chat_log(&self) -> &[ChatMessage] {
        &self.chat_log
    }

    pub fn render_chat(&self) -> Result<String, askama::Error> {
        ChatLogTemplate {
            bubbles: self.chat_log.iter().map(ChatBubble::from).collect(),
        }
        .render()
    }

    // ── Forms ────────────────────────────────────────────────────────────

    pub fn set_active_category(&mut self, category: Category) {
        self.active_category = Some(category);
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.active_category.as_ref()
    }

    /// Exactly one method is active at a time.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    pub fn selected_payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn set_forgot_step(&mut self, step: ForgotStep) {
        self.forgot_step = step;
    }

    pub fn forgot_step(&self) -> ForgotStep {
        self.forgot_step
    }

    pub fn set_profile_form(&mut self, form: ProfileUpdate) {
        self.profile_form = form;
    }

    pub fn profile_form(&self) -> &ProfileUpdate {
        &self.profile_form
    }
}
