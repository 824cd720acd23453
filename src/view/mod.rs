//! View renderer: an in-memory model of the storefront page.
//!
//! [`Page`] holds everything the shopper can see: which modals are open, what
//! each region shows, the header badges, the user menu, notifications and the
//! chat widget. Regions keep structured content and are turned into HTML on
//! demand by the askama templates in [`render`], so wishlist button flips show
//! up in every card the next time a region is rendered.

pub mod buttons;
pub mod page;
pub mod render;

pub use buttons::{Membership, WishlistButtons};
pub use page::{CartPanel, Page, NOTIFICATION_HISTORY};

use crate::auth::User;
use crate::domain::cart::CartItem;
use crate::domain::catalog::Product;
use crate::domain::order::Order;
use chrono::{DateTime, Duration, Utc};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL_MS: i64 = 3_000;

// ─── Modal ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modal {
    Login,
    Register,
    ForgotPassword,
    Profile,
    Orders,
    Cart,
    Wishlist,
    Product,
    Payment,
}

impl Modal {
    /// Element id of the modal on the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            Modal::Login => "login-modal",
            Modal::Register => "register-modal",
            Modal::ForgotPassword => "forgot-modal",
            Modal::Profile => "profile-modal",
            Modal::Orders => "orders-modal",
            Modal::Cart => "cart-modal",
            Modal::Wishlist => "wishlist-modal",
            Modal::Product => "product-modal",
            Modal::Payment => "payment-modal",
        }
    }
}

// ─── Region ──────────────────────────────────────────────────────────────────

/// Containers whose contents are replaced by handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Deals,
    Category,
    SearchResults,
    CartItems,
    Wishlist,
    ProductDetail,
    Orders,
    PaymentSummary,
}

/// What a region currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RegionContent {
    #[default]
    Blank,
    Products(Vec<Product>),
    SearchResults(Vec<Product>),
    CartLines(Vec<CartItem>),
    ProductDetail(Product),
    Orders(Vec<Order>),
    PaymentSummary { total: String },
    Message(render::Message),
}

impl RegionContent {
    /// The empty/failed state heading, if the region shows one.
    pub fn message_title(&self) -> Option<&str> {
        match self {
            RegionContent::Message(m) => Some(m.title.as_str()),
            _ => None,
        }
    }

    /// Products listed by a grid or search region.
    pub fn products(&self) -> &[Product] {
        match self {
            RegionContent::Products(p) | RegionContent::SearchResults(p) => p,
            _ => &[],
        }
    }
}

// ─── Badge ───────────────────────────────────────────────────────────────────

/// Header counter. Hidden at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Badge {
    pub count: u32,
}

impl Badge {
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }

    pub fn text(&self) -> String {
        self.count.to_string()
    }
}

// ─── UserMenu ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserMenu {
    #[default]
    Guest,
    SignedIn { name: String, email: String },
}

impl UserMenu {
    pub fn from_user(user: Option<&User>) -> Self {
        match user {
            Some(u) => UserMenu::SignedIn {
                name: u.name.clone(),
                email: u.email.clone(),
            },
            None => UserMenu::Guest,
        }
    }

    pub fn greeting(&self) -> String {
        match self {
            UserMenu::Guest => "Welcome, Guest".to_string(),
            UserMenu::SignedIn { name, .. } => format!("Welcome, {}", name),
        }
    }

    pub fn subtitle(&self) -> &str {
        match self {
            UserMenu::Guest => "Sign in to your account",
            UserMenu::SignedIn { email, .. } => email,
        }
    }

    /// Profile, orders and logout entries are shown instead of login/register.
    pub fn shows_account_entries(&self) -> bool {
        matches!(self, UserMenu::SignedIn { .. })
    }
}

// ─── Notification ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    /// Font Awesome icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
            NotificationKind::Info => "info-circle",
            NotificationKind::Warning => "exclamation-triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now - self.shown_at < Duration::milliseconds(NOTIFICATION_TTL_MS)
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        use askama::Template;
        render::NotificationTemplate {
            kind: self.kind.as_str(),
            icon: self.kind.icon(),
            message: self.message.clone(),
        }
        .render()
    }
}

// ─── Forgot password ─────────────────────────────────────────────────────────

/// The two steps of the simulated reset flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForgotStep {
    #[default]
    EnterIdentifier,
    EnterOtp,
}
