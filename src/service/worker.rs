//! Pipeline composer.

use std::any::Any;

use super::delivery::RealMailService;
use super::error::InspectionError;
use super::handler::MailService;
use crate::mail::Item;

/// Runs items through an ordered list of handlers, then delivers them.
///
/// Each handler's output is the next handler's input. The first failure
/// stops the run: later handlers and the delivery stage are skipped and
/// the error is returned to the caller.
pub struct UntrustworthyMailWorker {
    services: Vec<Box<dyn MailService>>,
    real_service: RealMailService,
}

impl UntrustworthyMailWorker {
    /// Create a worker with the given handlers, in order.
    pub fn new(services: impl IntoIterator<Item = Box<dyn MailService>>) -> Self {
        Self::with_delivery(services, RealMailService::new())
    }

    /// Create a worker with a specific delivery stage.
    pub fn with_delivery(
        services: impl IntoIterator<Item = Box<dyn MailService>>,
        real_service: RealMailService,
    ) -> Self {
        Self {
            services: services.into_iter().collect(),
            real_service,
        }
    }

    /// The configured handlers, in processing order.
    pub fn services(&self) -> &[Box<dyn MailService>] {
        &self.services
    }

    /// First handler of type `T`, if any.
    pub fn service<T: MailService + 'static>(&self) -> Option<&T> {
        self.services
            .iter()
            .find_map(|service| service.as_any().downcast_ref::<T>())
    }

    /// The terminal delivery stage.
    pub fn real_mail_service(&self) -> &RealMailService {
        &self.real_service
    }
}

impl MailService for UntrustworthyMailWorker {
    fn process(&mut self, item: Item) -> Result<Item, InspectionError> {
        let mut current = item;
        for service in self.services.iter_mut() {
            current = service.process(current)?;
        }
        self.real_service.process(current)
    }

    fn name(&self) -> &'static str {
        "worker"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
