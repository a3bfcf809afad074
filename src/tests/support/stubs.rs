use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::admin::application::domain::entities::ExportKind;
use crate::admin::application::ports::incoming::use_cases::{
    AdminArtisanListQuery, AdminBookingListQuery, AdminError, AdminUserListQuery, Dashboard,
    DashboardUseCase, ExportData, ExportUseCase, ManageArtisansUseCase, ManageBookingsUseCase,
    ManageUsersUseCase,
};
use crate::admin::application::ports::outgoing::{AdminArtisanRow, BookingPatch, UserPatch};
use crate::artisan::application::ports::incoming::use_cases::{
    ArtisanDetails, ArtisanProfileResult, GetArtisanError, GetArtisanUseCase, ListArtisansError,
    ListArtisansUseCase, UpdateArtisanProfileCommand, UpdateArtisanProfileError,
    UpdateArtisanProfileUseCase,
};
use crate::artisan::application::ports::outgoing::{
    ArtisanListFilter, ArtisanView, UpdateArtisanData,
};
use crate::auth::application::domain::entities::Caller;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase, CurrentUserResult,
    GetCurrentUserError, GetCurrentUserUseCase, LoginCommand, LoginError, LoginResult,
    LoginUserUseCase, RegisterUserCommand, RegisterUserError, RegisterUserResult,
    RegisterUserUseCase, ResendCodeCommand, ResendCodeError, ResendCodeUseCase,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase, VerifyEmailCommand,
    VerifyEmailError, VerifyEmailUseCase,
};
use crate::auth::application::ports::outgoing::UserResult;
use crate::booking::application::ports::incoming::use_cases::{
    CancelBookingCommand, CancelBookingError, CancelBookingUseCase, CreateBookingCommand,
    CreateBookingError, CreateBookingUseCase, ListBookingsError, ListBookingsQuery,
    ListBookingsUseCase, UpdateBookingCommand, UpdateBookingError, UpdateBookingResult,
    UpdateBookingUseCase,
};
use crate::booking::application::ports::outgoing::{BookingResult, BookingView};
use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsError, ListNotificationsQuery, ListNotificationsUseCase, MarkReadCommand,
    MarkReadError, MarkReadResult, MarkReadUseCase, NotificationList,
};
use crate::payment::application::ports::incoming::use_cases::{
    CreatePaymentCommand, CreatePaymentError, CreatePaymentOutcome, CreatePaymentUseCase,
    ListBookingPaymentsError, ListBookingPaymentsUseCase,
};
use crate::payment::application::ports::outgoing::PaymentResult;
use crate::push::application::domain::entities::{DeliveryReport, PushPayload};
use crate::push::application::ports::incoming::use_cases::{
    GetPublicKeyError, GetPublicKeyUseCase, SendPushUseCase, SubscribeCommand, SubscribeError,
    SubscribeUseCase, UnsubscribeCommand, UnsubscribeError, UnsubscribeUseCase,
};
use crate::review::application::ports::incoming::use_cases::{
    CreateReviewCommand, CreateReviewError, CreateReviewUseCase, ListReviewsError,
    ListReviewsUseCase,
};
use crate::review::application::ports::outgoing::{ReviewResult, ReviewView};
use crate::shared::api::Paginated;

const UNCONFIGURED: &str = "use case not configured for this test";

/// Default for every slot of `TestAppStateBuilder`. Each call fails as a
/// repository error so a handler hitting an unconfigured use case returns 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

fn unconfigured() -> String {
    UNCONFIGURED.to_string()
}

//
// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl RegisterUserUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<RegisterUserResult, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl LoginUserUseCase for Unconfigured {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        Err(LoginError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl GetCurrentUserUseCase for Unconfigured {
    async fn execute(&self, _user_id: Uuid) -> Result<CurrentUserResult, GetCurrentUserError> {
        Err(GetCurrentUserError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl VerifyEmailUseCase for Unconfigured {
    async fn execute(&self, _command: VerifyEmailCommand) -> Result<(), VerifyEmailError> {
        Err(VerifyEmailError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl ResendCodeUseCase for Unconfigured {
    async fn execute(&self, _command: ResendCodeCommand) -> Result<(), ResendCodeError> {
        Err(ResendCodeError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl UpdateProfileUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UserResult, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl ChangePasswordUseCase for Unconfigured {
    async fn execute(&self, _command: ChangePasswordCommand) -> Result<(), ChangePasswordError> {
        Err(ChangePasswordError::RepositoryError(unconfigured()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Artisans
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl ListArtisansUseCase for Unconfigured {
    async fn execute(
        &self,
        _filter: ArtisanListFilter,
    ) -> Result<Vec<ArtisanView>, ListArtisansError> {
        Err(ListArtisansError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl GetArtisanUseCase for Unconfigured {
    async fn execute(&self, _artisan_id: Uuid) -> Result<ArtisanDetails, GetArtisanError> {
        Err(GetArtisanError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl UpdateArtisanProfileUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: UpdateArtisanProfileCommand,
    ) -> Result<ArtisanProfileResult, UpdateArtisanProfileError> {
        Err(UpdateArtisanProfileError::RepositoryError(unconfigured()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Bookings, reviews, payments
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl ListBookingsUseCase for Unconfigured {
    async fn execute(&self, _query: ListBookingsQuery) -> Result<Vec<BookingView>, ListBookingsError> {
        Err(ListBookingsError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl CreateBookingUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: CreateBookingCommand,
    ) -> Result<BookingResult, CreateBookingError> {
        Err(CreateBookingError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl UpdateBookingUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: UpdateBookingCommand,
    ) -> Result<UpdateBookingResult, UpdateBookingError> {
        Err(UpdateBookingError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl CancelBookingUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: CancelBookingCommand,
    ) -> Result<BookingResult, CancelBookingError> {
        Err(CancelBookingError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl ListReviewsUseCase for Unconfigured {
    async fn execute(&self, _artisan_id: Uuid) -> Result<Vec<ReviewView>, ListReviewsError> {
        Err(ListReviewsError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl CreateReviewUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: CreateReviewCommand,
    ) -> Result<ReviewResult, CreateReviewError> {
        Err(CreateReviewError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl CreatePaymentUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: CreatePaymentCommand,
    ) -> Result<CreatePaymentOutcome, CreatePaymentError> {
        Err(CreatePaymentError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl ListBookingPaymentsUseCase for Unconfigured {
    async fn execute(
        &self,
        _booking_id: Uuid,
        _caller: Caller,
    ) -> Result<Vec<PaymentResult>, ListBookingPaymentsError> {
        Err(ListBookingPaymentsError::RepositoryError(unconfigured()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Notifications & push
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl ListNotificationsUseCase for Unconfigured {
    async fn execute(
        &self,
        _query: ListNotificationsQuery,
    ) -> Result<NotificationList, ListNotificationsError> {
        Err(ListNotificationsError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl MarkReadUseCase for Unconfigured {
    async fn execute(&self, _command: MarkReadCommand) -> Result<MarkReadResult, MarkReadError> {
        Err(MarkReadError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl GetPublicKeyUseCase for Unconfigured {
    async fn execute(&self) -> Result<String, GetPublicKeyError> {
        Err(GetPublicKeyError::NotConfigured)
    }
}

#[async_trait]
impl SubscribeUseCase for Unconfigured {
    async fn execute(&self, _command: SubscribeCommand) -> Result<(), SubscribeError> {
        Err(SubscribeError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl UnsubscribeUseCase for Unconfigured {
    async fn execute(&self, _command: UnsubscribeCommand) -> Result<bool, UnsubscribeError> {
        Err(UnsubscribeError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl SendPushUseCase for Unconfigured {
    async fn send_to_user(&self, _user_id: Uuid, _payload: PushPayload) -> DeliveryReport {
        DeliveryReport::empty()
    }

    async fn send_to_users(&self, user_ids: &[Uuid], _payload: PushPayload) -> Vec<DeliveryReport> {
        user_ids.iter().map(|_| DeliveryReport::empty()).collect()
    }
}

//
// ──────────────────────────────────────────────────────────
// Admin
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl ManageArtisansUseCase for Unconfigured {
    async fn list(
        &self,
        _query: AdminArtisanListQuery,
    ) -> Result<Paginated<AdminArtisanRow>, AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }

    async fn update(
        &self,
        _artisan_id: Uuid,
        _data: UpdateArtisanData,
    ) -> Result<AdminArtisanRow, AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }

    async fn delete(&self, _artisan_id: Uuid) -> Result<(), AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl ManageBookingsUseCase for Unconfigured {
    async fn list(
        &self,
        _query: AdminBookingListQuery,
    ) -> Result<Paginated<BookingView>, AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }

    async fn update(
        &self,
        _booking_id: Uuid,
        _patch: BookingPatch,
    ) -> Result<BookingResult, AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }

    async fn delete(&self, _booking_id: Uuid) -> Result<(), AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl ManageUsersUseCase for Unconfigured {
    async fn list(&self, _query: AdminUserListQuery) -> Result<Paginated<UserResult>, AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }

    async fn update(&self, _user_id: Uuid, _patch: UserPatch) -> Result<UserResult, AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }

    async fn delete(&self, _user_id: Uuid) -> Result<(), AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl DashboardUseCase for Unconfigured {
    async fn execute(&self, _now: DateTime<Utc>) -> Result<Dashboard, AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }
}

#[async_trait]
impl ExportUseCase for Unconfigured {
    async fn execute(&self, _kind: ExportKind) -> Result<ExportData, AdminError> {
        Err(AdminError::RepositoryError(unconfigured()))
    }
}
