//! The ordering session: every store plus the view state, behind one owner.
//!
//! A [`Session`] is the single writer of all session data. Each public
//! method is one user interaction and completes synchronously; none of them
//! can fail. Unknown ids are ignored, quantities clamp at zero and an empty
//! cart can be finalized.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use gourmet_core::{CategoryFilter, CurrencyCode, FulfillmentMethod, Language, ProductId, View};

use crate::calendar::Calendar;
use crate::cart::{Cart, CartTotals};
use crate::catalog::Catalog;
use crate::dialog::ProductDialog;
use crate::inbox::Inbox;
use crate::models::{CalendarEvent, Message, Order, Product};
use crate::notify::{Notifier, RecordingNotifier, Toast};
use crate::orders::OrderLedger;
use crate::settings::Settings;

/// One running instance of the ordering screen.
#[derive(Debug)]
pub struct Session<N: Notifier = RecordingNotifier> {
    catalog: Catalog,
    category: CategoryFilter,
    query: String,
    cart: Cart,
    orders: OrderLedger,
    inbox: Inbox,
    calendar: Calendar,
    settings: Settings,
    dialog: ProductDialog,
    view: View,
    fulfillment: FulfillmentMethod,
    notifier: N,
}

impl<N: Notifier> Session<N> {
    /// Start a session over `catalog` with the given initial settings.
    pub fn new(catalog: Catalog, settings: Settings, notifier: N) -> Self {
        let currency_code = catalog
            .products()
            .first()
            .map_or(CurrencyCode::EUR, |product| product.price.currency_code);

        Self {
            catalog,
            category: CategoryFilter::All,
            query: String::new(),
            cart: Cart::new(currency_code),
            orders: OrderLedger::new(),
            inbox: Inbox::new(),
            calendar: Calendar::new(),
            settings,
            dialog: ProductDialog::Closed,
            view: View::Products,
            fulfillment: FulfillmentMethod::TakeAway,
            notifier,
        }
    }

    /// Start a session over the built-in catalog with default settings.
    pub fn gourmet(notifier: N) -> Self {
        Self::new(Catalog::gourmet(), Settings::default(), notifier)
    }

    // ---------------------------------------------------------------------
    // Catalog browsing
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn category(&self) -> CategoryFilter {
        self.category
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        debug!(%category, "Selected category");
        self.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query = %self.query, "Search query changed");
    }

    /// Catalog products passing the current category and search query.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.category, &self.query)
    }

    // ---------------------------------------------------------------------
    // Product dialog
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn dialog(&self) -> &ProductDialog {
        &self.dialog
    }

    /// Open the product dialog on a catalog product.
    ///
    /// Returns `false` (and leaves the dialog as it was) for an unknown id.
    pub fn open_product(&mut self, id: ProductId) -> bool {
        let Some(product) = self.catalog.get(id) else {
            debug!(product_id = %id, "Ignored dialog request for unknown product");
            return false;
        };
        self.dialog.open(product.clone());
        true
    }

    pub fn close_product(&mut self) {
        self.dialog.close();
    }

    /// Add the product shown in the dialog to the cart and close the dialog.
    ///
    /// Does nothing when the dialog is closed. Returns whether a product
    /// was added.
    pub fn confirm_product(&mut self) -> bool {
        match self.dialog.close() {
            Some(product) => {
                self.add_to_cart(&product);
                true
            }
            None => false,
        }
    }

    // ---------------------------------------------------------------------
    // Cart
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `product` and emit a confirmation toast.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
        self.notifier.notify(Toast::product_added(product));
    }

    /// Add one unit of the catalog product `id`. Unknown ids are ignored.
    pub fn add_product(&mut self, id: ProductId) -> bool {
        let Some(product) = self.catalog.get(id) else {
            debug!(product_id = %id, "Ignored add for unknown product");
            return false;
        };
        self.cart.add(product);
        self.notifier.notify(Toast::product_added(product));
        true
    }

    /// Change a line's quantity by `delta`; see [`Cart::adjust_quantity`].
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i32) -> Option<u32> {
        self.cart.adjust_quantity(id, delta)
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    // ---------------------------------------------------------------------
    // Orders
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn orders(&self) -> &OrderLedger {
        &self.orders
    }

    /// Turn the cart into an order stamped with the current time.
    pub fn finalize_order(&mut self) -> &Order {
        self.finalize_order_at(Utc::now())
    }

    /// Turn the cart into an order placed at `placed_at`.
    ///
    /// Snapshots the lines and total, records the order at the head of the
    /// history, empties the cart and emits a confirmation toast.
    pub fn finalize_order_at(&mut self, placed_at: DateTime<Utc>) -> &Order {
        let total = self.cart.totals().total;
        let items = self.cart.take_lines();
        let order = self.orders.record(items, total, self.fulfillment, placed_at);
        self.notifier.notify(Toast::order_placed(order));
        order
    }

    // ---------------------------------------------------------------------
    // Messages and calendar
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    pub fn add_message(&mut self, content: impl Into<String>) -> &Message {
        self.inbox.post(content, Utc::now())
    }

    pub fn add_message_at(
        &mut self,
        content: impl Into<String>,
        sent_at: DateTime<Utc>,
    ) -> &Message {
        self.inbox.post(content, sent_at)
    }

    #[must_use]
    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn add_event(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> &CalendarEvent {
        self.calendar.add_event(title, description, date)
    }

    /// Date-picker callback.
    pub fn select_date(&mut self, date: NaiveDate) -> &CalendarEvent {
        self.calendar.select_date(date)
    }

    // ---------------------------------------------------------------------
    // Settings, navigation, fulfillment
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        self.settings.set_notifications(enabled);
    }

    pub fn set_language(&mut self, language: Language) {
        self.settings.set_language(language);
    }

    pub fn set_dark_theme(&mut self, enabled: bool) {
        self.settings.set_dark_theme(enabled);
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        debug!(%view, "Navigated");
        self.view = view;
    }

    #[must_use]
    pub const fn fulfillment(&self) -> FulfillmentMethod {
        self.fulfillment
    }

    pub fn set_fulfillment(&mut self, method: FulfillmentMethod) {
        debug!(%method, "Fulfillment method changed");
        self.fulfillment = method;
    }

    pub fn toggle_fulfillment(&mut self) -> FulfillmentMethod {
        self.set_fulfillment(self.fulfillment.toggled());
        self.fulfillment
    }

    // ---------------------------------------------------------------------
    // Notifier access
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use gourmet_core::{Category, OrderId};

    use super::*;

    fn session() -> Session<RecordingNotifier> {
        Session::gourmet(RecordingNotifier::new())
    }

    #[test]
    fn test_visible_products_follow_filters() {
        let mut session = session();
        assert_eq!(session.visible_products().len(), 6);

        session.select_category(CategoryFilter::Only(Category::Meats));
        assert_eq!(session.visible_products().len(), 2);

        session.set_query("cordero");
        let visible = session.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, ProductId::new(2));
    }

    #[test]
    fn test_dialog_gates_adding() {
        let mut session = session();
        assert!(!session.confirm_product());
        assert!(session.cart().is_empty());

        assert!(session.open_product(ProductId::new(5)));
        assert!(session.dialog().is_open());
        assert!(session.confirm_product());
        assert!(!session.dialog().is_open());
        assert_eq!(session.cart().line(ProductId::new(5)).unwrap().quantity, 1);
    }

    #[test]
    fn test_close_dialog_adds_nothing() {
        let mut session = session();
        session.open_product(ProductId::new(1));
        session.close_product();
        assert!(session.cart().is_empty());
        assert!(session.notifier().toasts().is_empty());
    }

    #[test]
    fn test_open_unknown_product_keeps_dialog_closed() {
        let mut session = session();
        assert!(!session.open_product(ProductId::new(42)));
        assert!(!session.dialog().is_open());
    }

    #[test]
    fn test_add_emits_toast() {
        let mut session = session();
        assert!(session.add_product(ProductId::new(3)));
        assert!(!session.add_product(ProductId::new(99)));
        assert_eq!(session.notifier().toasts().len(), 1);
        assert_eq!(
            session.notifier().last().unwrap().description,
            "Salmón Ahumado has been added to your order."
        );
    }

    #[test]
    fn test_finalize_snapshots_and_clears() {
        let mut session = session();
        session.add_product(ProductId::new(4));
        session.add_product(ProductId::new(4));
        session.set_fulfillment(FulfillmentMethod::HomeDelivery);

        let order = session.finalize_order().clone();
        assert_eq!(order.id, OrderId::new(1));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        // 2 × 19.99 = 39.98, plus 21% = 48.3758
        assert_eq!(order.total.amount, Decimal::new(483_758, 4));
        assert_eq!(order.fulfillment, FulfillmentMethod::HomeDelivery);
        assert!(session.cart().is_empty());
        assert_eq!(
            session.notifier().last().unwrap().description,
            "Your order #1 for €48.38 has been processed. Thank you for your purchase!"
        );
    }

    #[test]
    fn test_finalize_empty_cart_is_allowed() {
        let mut session = session();
        let order = session.finalize_order();
        assert!(order.items.is_empty());
        assert!(order.total.amount.is_zero());
    }

    #[test]
    fn test_toggle_fulfillment() {
        let mut session = session();
        assert_eq!(session.toggle_fulfillment(), FulfillmentMethod::HomeDelivery);
        assert_eq!(session.toggle_fulfillment(), FulfillmentMethod::TakeAway);
    }

    #[test]
    fn test_navigate_and_settings() {
        let mut session = session();
        session.navigate(View::Settings);
        session.set_language(Language::English);
        session.set_dark_theme(true);
        session.set_notifications(false);
        assert_eq!(session.view(), View::Settings);
        assert_eq!(session.settings().language, Language::English);
        assert!(session.settings().dark_theme);
        assert!(!session.settings().notifications_enabled);
    }
}
