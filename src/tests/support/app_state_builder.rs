use std::sync::Arc;

use actix_web::web;

use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::ports::incoming::use_cases::{
    DashboardUseCase, ExportUseCase, ManageArtisansUseCase, ManageBookingsUseCase,
    ManageUsersUseCase,
};
use crate::artisan::application::artisan_use_cases::ArtisanUseCases;
use crate::artisan::application::ports::incoming::use_cases::{
    GetArtisanUseCase, ListArtisansUseCase, UpdateArtisanProfileUseCase,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, GetCurrentUserUseCase, LoginUserUseCase, RegisterUserUseCase,
    ResendCodeUseCase, UpdateProfileUseCase, VerifyEmailUseCase,
};
use crate::booking::application::booking_use_cases::BookingUseCases;
use crate::booking::application::ports::incoming::use_cases::{
    CancelBookingUseCase, CreateBookingUseCase, ListBookingsUseCase, UpdateBookingUseCase,
};
use crate::notification::application::notification_use_cases::NotificationUseCases;
use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsUseCase, MarkReadUseCase,
};
use crate::payment::application::payment_use_cases::PaymentUseCases;
use crate::payment::application::ports::incoming::use_cases::{
    CreatePaymentUseCase, ListBookingPaymentsUseCase,
};
use crate::push::application::ports::incoming::use_cases::{
    GetPublicKeyUseCase, SubscribeUseCase, UnsubscribeUseCase,
};
use crate::push::application::push_use_cases::PushUseCases;
use crate::review::application::ports::incoming::use_cases::{
    CreateReviewUseCase, ListReviewsUseCase,
};
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::tests::support::stubs::Unconfigured;
use crate::AppState;

/// Assembles an `AppState` for route tests. Every slot starts as
/// [`Unconfigured`]; tests swap in only the use case under test.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    artisan: ArtisanUseCases,
    booking: BookingUseCases,
    review: ReviewUseCases,
    notification: NotificationUseCases,
    push: PushUseCases,
    payment: PaymentUseCases,
    admin: AdminUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let stub = Arc::new(Unconfigured);
        Self {
            auth: AuthUseCases {
                register: stub.clone(),
                login: stub.clone(),
                current_user: stub.clone(),
                verify_email: stub.clone(),
                resend_code: stub.clone(),
                update_profile: stub.clone(),
                change_password: stub.clone(),
            },
            artisan: ArtisanUseCases {
                list: stub.clone(),
                get: stub.clone(),
                update_profile: stub.clone(),
            },
            booking: BookingUseCases {
                list: stub.clone(),
                create: stub.clone(),
                update: stub.clone(),
                cancel: stub.clone(),
            },
            review: ReviewUseCases {
                list: stub.clone(),
                create: stub.clone(),
            },
            notification: NotificationUseCases {
                list: stub.clone(),
                mark_read: stub.clone(),
            },
            push: PushUseCases {
                public_key: stub.clone(),
                subscribe: stub.clone(),
                unsubscribe: stub.clone(),
                send: stub.clone(),
            },
            payment: PaymentUseCases {
                create: stub.clone(),
                list_for_booking: stub.clone(),
            },
            admin: AdminUseCases {
                artisans: stub.clone(),
                bookings: stub.clone(),
                users: stub.clone(),
                dashboard: stub.clone(),
                export: stub,
            },
        }
    }
}

impl TestAppStateBuilder {
    // Auth

    pub fn with_register(mut self, uc: impl RegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_current_user(
        mut self,
        uc: impl GetCurrentUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.current_user = Arc::new(uc);
        self
    }

    pub fn with_verify_email(mut self, uc: impl VerifyEmailUseCase + Send + Sync + 'static) -> Self {
        self.auth.verify_email = Arc::new(uc);
        self
    }

    pub fn with_resend_code(mut self, uc: impl ResendCodeUseCase + Send + Sync + 'static) -> Self {
        self.auth.resend_code = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl ChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.change_password = Arc::new(uc);
        self
    }

    // Artisans

    pub fn with_list_artisans(
        mut self,
        uc: impl ListArtisansUseCase + Send + Sync + 'static,
    ) -> Self {
        self.artisan.list = Arc::new(uc);
        self
    }

    pub fn with_get_artisan(mut self, uc: impl GetArtisanUseCase + Send + Sync + 'static) -> Self {
        self.artisan.get = Arc::new(uc);
        self
    }

    pub fn with_update_artisan_profile(
        mut self,
        uc: impl UpdateArtisanProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.artisan.update_profile = Arc::new(uc);
        self
    }

    // Bookings

    pub fn with_list_bookings(
        mut self,
        uc: impl ListBookingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.list = Arc::new(uc);
        self
    }

    pub fn with_create_booking(
        mut self,
        uc: impl CreateBookingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.create = Arc::new(uc);
        self
    }

    pub fn with_update_booking(
        mut self,
        uc: impl UpdateBookingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.update = Arc::new(uc);
        self
    }

    pub fn with_cancel_booking(
        mut self,
        uc: impl CancelBookingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.booking.cancel = Arc::new(uc);
        self
    }

    // Reviews

    pub fn with_list_reviews(mut self, uc: impl ListReviewsUseCase + Send + Sync + 'static) -> Self {
        self.review.list = Arc::new(uc);
        self
    }

    pub fn with_create_review(
        mut self,
        uc: impl CreateReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.create = Arc::new(uc);
        self
    }

    // Notifications

    pub fn with_list_notifications(
        mut self,
        uc: impl ListNotificationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.notification.list = Arc::new(uc);
        self
    }

    pub fn with_mark_read(mut self, uc: impl MarkReadUseCase + Send + Sync + 'static) -> Self {
        self.notification.mark_read = Arc::new(uc);
        self
    }

    // Push

    pub fn with_public_key(mut self, uc: impl GetPublicKeyUseCase + Send + Sync + 'static) -> Self {
        self.push.public_key = Arc::new(uc);
        self
    }

    pub fn with_subscribe(mut self, uc: impl SubscribeUseCase + Send + Sync + 'static) -> Self {
        self.push.subscribe = Arc::new(uc);
        self
    }

    pub fn with_unsubscribe(mut self, uc: impl UnsubscribeUseCase + Send + Sync + 'static) -> Self {
        self.push.unsubscribe = Arc::new(uc);
        self
    }

    // Payments

    pub fn with_create_payment(
        mut self,
        uc: impl CreatePaymentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.payment.create = Arc::new(uc);
        self
    }

    pub fn with_list_booking_payments(
        mut self,
        uc: impl ListBookingPaymentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.payment.list_for_booking = Arc::new(uc);
        self
    }

    // Admin

    pub fn with_admin_artisans(
        mut self,
        uc: impl ManageArtisansUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.artisans = Arc::new(uc);
        self
    }

    pub fn with_admin_bookings(
        mut self,
        uc: impl ManageBookingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.bookings = Arc::new(uc);
        self
    }

    pub fn with_admin_users(mut self, uc: impl ManageUsersUseCase + Send + Sync + 'static) -> Self {
        self.admin.users = Arc::new(uc);
        self
    }

    pub fn with_admin_dashboard(
        mut self,
        uc: impl DashboardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.dashboard = Arc::new(uc);
        self
    }

    pub fn with_admin_export(mut self, uc: impl ExportUseCase + Send + Sync + 'static) -> Self {
        self.admin.export = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            artisan: self.artisan,
            booking: self.booking,
            review: self.review,
            notification: self.notification,
            push: self.push,
            payment: self.payment,
            admin: self.admin,
        })
    }
}
