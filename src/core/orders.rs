use crate::domain::model::Order;
use crate::domain::ports::{OrderRepository, PaymentGateway};

pub struct OrderService<R: OrderRepository, P: PaymentGateway> {
    repository: R,
    payment_gateway: P,
}

impl<R: OrderRepository, P: PaymentGateway> OrderService<R, P> {
    pub fn new(repository: R, payment_gateway: P) -> Self {
        Self {
            repository,
            payment_gateway,
        }
    }

    /// Charges the order total once. A refused charge leaves the order unpaid
    /// and unsaved; an accepted one marks it paid and saves it once.
    pub fn place_order(&self, order: &mut Order) -> bool {
        if !self.payment_gateway.charge(order.total) {
            tracing::warn!(total = %order.total, "payment refused, order not saved");
            return false;
        }

        order.is_paid = true;
        self.repository.save(order);
        tracing::info!(total = %order.total, "order paid and saved");
        true
    }
}
