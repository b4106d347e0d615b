//! Per-visitor cart registry.
//!
//! Carts are transient by design: they live in memory only and do not
//! survive a restart. A submitted cart becomes an order request and its
//! entry is dropped from the registry. Cart creation is unauthenticated,
//! so every entry carries a last-access stamp and abandoned carts are
//! swept periodically to keep the map bounded.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::models::cart::{Cart, CartItem};

struct CartEntry {
    cart: Cart,
    touched_at: DateTime<Utc>,
}

impl CartEntry {
    fn new() -> Self {
        CartEntry {
            cart: Cart::default(),
            touched_at: Utc::now(),
        }
    }
}

/// In-memory carts keyed by a server-issued cart id.
#[derive(Default)]
pub struct CartRegistry {
    carts: RwLock<HashMap<Uuid, CartEntry>>,
}

impl CartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cart and returns its id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut carts = self.carts.write().await;
        carts.insert(id, CartEntry::new());
        id
    }

    /// Fetches a cart, refreshing its last-access stamp.
    pub async fn get(&self, id: Uuid) -> Option<Cart> {
        let mut carts = self.carts.write().await;
        let entry = carts.get_mut(&id)?;
        entry.touched_at = Utc::now();
        Some(entry.cart.clone())
    }

    /// Adds an item; a second add of the same service id is ignored.
    pub async fn add_item(&self, id: Uuid, item: CartItem) -> Option<Cart> {
        self.mutate(id, |cart| {
            cart.add_item(item);
        })
        .await
    }

    pub async fn remove_item(&self, id: Uuid, service_id: &str) -> Option<Cart> {
        self.mutate(id, |cart| {
            cart.remove_item(service_id);
        })
        .await
    }

    /// Sets an item quantity. Outer `None` means the cart is unknown;
    /// inner `None` means the item is.
    pub async fn update_quantity(
        &self,
        id: Uuid,
        service_id: &str,
        quantity: u32,
    ) -> Option<Option<Cart>> {
        let mut carts = self.carts.write().await;
        let entry = carts.get_mut(&id)?;
        entry.touched_at = Utc::now();
        if entry.cart.update_quantity(service_id, quantity) {
            Some(Some(entry.cart.clone()))
        } else {
            Some(None)
        }
    }

    pub async fn clear(&self, id: Uuid) -> Option<Cart> {
        self.mutate(id, |cart| cart.clear()).await
    }

    /// Drops a cart entirely; used once its contents became an order.
    pub async fn remove(&self, id: Uuid) -> Option<Cart> {
        let mut carts = self.carts.write().await;
        carts.remove(&id).map(|entry| entry.cart)
    }

    /// Evicts carts idle for longer than `max_idle`, returning the count.
    pub async fn sweep_stale(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut carts = self.carts.write().await;
        let before = carts.len();
        carts.retain(|_, entry| entry.touched_at > cutoff);
        before - carts.len()
    }

    async fn mutate<F>(&self, id: Uuid, apply: F) -> Option<Cart>
    where
        F: FnOnce(&mut Cart),
    {
        let mut carts = self.carts.write().await;
        let entry = carts.get_mut(&id)?;
        entry.touched_at = Utc::now();
        apply(&mut entry.cart);
        Some(entry.cart.clone())
    }
}
