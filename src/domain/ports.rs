use crate::domain::model::{Money, Order};

/// Charges a customer. Returns whether the charge went through.
pub trait PaymentGateway {
    fn charge(&self, amount: Money) -> bool;
}

/// Persists paid orders.
pub trait OrderRepository {
    fn save(&self, order: &Order);
}

impl<T: PaymentGateway + ?Sized> PaymentGateway for &T {
    fn charge(&self, amount: Money) -> bool {
        (**self).charge(amount)
    }
}

impl<T: OrderRepository + ?Sized> OrderRepository for &T {
    fn save(&self, order: &Order) {
        (**self).save(order)
    }
}
