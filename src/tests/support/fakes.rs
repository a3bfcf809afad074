//! In-memory port implementations shared by service and route tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::artisan::application::domain::entities::{ApprovalStatus, Availability};
use crate::artisan::application::ports::outgoing::{
    ArtisanRepository, ArtisanRepositoryError, ArtisanResult, CreateArtisanData,
    UpdateArtisanData,
};
use crate::auth::application::domain::entities::{Role, VerificationKind};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, NewVerificationCode, PasswordHasher, TokenClaims, TokenError,
    TokenProvider, UpdateUserData, UserCredentials, UserRepository, UserRepositoryError,
    UserResult, VerificationCodeRecord, VerificationCodeRepository,
    VerificationCodeRepositoryError,
};
use crate::booking::application::domain::entities::{BookingStatus, ServiceSnapshot, Urgency};
use crate::booking::application::ports::outgoing::{
    BookingRepository, BookingRepositoryError, BookingResult, CreateBookingData,
};
use crate::email::application::ports::outgoing::{
    BookingEmail, UserEmailNotificationError, UserEmailNotifier,
};
use crate::notification::application::domain::entities::{NotificationData, NotificationEvent};
use crate::notification::application::ports::incoming::use_cases::NotifyUserUseCase;
use crate::notification::application::ports::outgoing::{
    NewNotification, NotificationRepository, NotificationRepositoryError, NotificationResult,
};
use crate::payment::application::domain::entities::{PaymentStatus, DEFAULT_CURRENCY};
use crate::payment::application::ports::outgoing::{
    CreatePaymentData, PaymentRepository, PaymentRepositoryError, PaymentResult,
};
use crate::push::application::domain::entities::{DeliveryReport, PushPayload};
use crate::push::application::ports::incoming::use_cases::SendPushUseCase;
use crate::push::application::ports::outgoing::{
    NewPushSubscription, PushSubscriptionRecord, PushSubscriptionRepository,
    PushSubscriptionRepositoryError,
};
use crate::review::application::ports::outgoing::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};

//
// ──────────────────────────────────────────────────────────
// Builders
// ──────────────────────────────────────────────────────────
//

pub fn sample_user(email: &str, role: Role, verified: bool) -> UserResult {
    UserResult {
        id: Uuid::new_v4(),
        full_name: "Test User".to_string(),
        email: email.to_string(),
        phone: Some("0612345678".to_string()),
        city: Some("Casablanca".to_string()),
        role,
        avatar: None,
        is_verified: verified,
        created_at: Utc::now(),
    }
}

pub fn sample_artisan(user_id: Uuid) -> ArtisanResult {
    ArtisanResult {
        id: Uuid::new_v4(),
        user_id,
        bio: String::new(),
        experience: 3,
        services: vec![],
        portfolio: vec![],
        availability: Availability::default(),
        rating: 0.0,
        total_reviews: 0,
        completed_jobs: 0,
        is_available: true,
        response_time: "< 1 heure".to_string(),
        approval_status: ApprovalStatus::Pending,
        created_at: Utc::now(),
    }
}

pub fn sample_booking(customer_id: Uuid, artisan_id: Uuid) -> BookingResult {
    BookingResult {
        id: Uuid::new_v4(),
        customer_id,
        artisan_id,
        service: ServiceSnapshot {
            category: "plumbing".to_string(),
            name: "Plomberie".to_string(),
            price: "150-300 MAD/h".to_string(),
        },
        date: Utc::now().date_naive(),
        time: "10:00".to_string(),
        address: "12 Rue Atlas, Casablanca".to_string(),
        description: String::new(),
        urgency: Urgency::Normal,
        status: BookingStatus::Pending,
        total_price: None,
        rating: None,
        review: None,
        created_at: Utc::now(),
    }
}

pub fn code_record(email: &str, code: &str, expires_at: DateTime<Utc>) -> VerificationCodeRecord {
    VerificationCodeRecord {
        id: Uuid::new_v4(),
        email: email.to_string(),
        code: code.to_string(),
        kind: VerificationKind::EmailVerification,
        expires_at,
        used: false,
        created_at: Utc::now(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    rows: Arc<Mutex<Vec<(UserResult, String)>>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, user: UserResult, password_hash: String) {
        self.rows.lock().unwrap().push((user, password_hash));
    }

    pub fn password_hash(&self, email: &str) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(_, h)| h.clone())
    }

    pub fn is_verified(&self, email: &str) -> bool {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .any(|(u, _)| u.email == email && u.is_verified)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|(u, _)| u.email == data.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }
        let user = UserResult {
            id: Uuid::new_v4(),
            full_name: data.full_name,
            email: data.email,
            phone: data.phone,
            city: data.city,
            role: data.role,
            avatar: None,
            is_verified: false,
            created_at: Utc::now(),
        };
        rows.push((user.clone(), data.password_hash));
        Ok(user)
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserResult>, UserRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserResult>, UserRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, h)| UserCredentials {
                user: u.clone(),
                password_hash: h.clone(),
            }))
    }

    async fn find_credentials_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserCredentials>, UserRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, h)| UserCredentials {
                user: u.clone(),
                password_hash: h.clone(),
            }))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let (user, _) = rows
            .iter_mut()
            .find(|(u, _)| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        if let Some(name) = data.full_name {
            user.full_name = name;
        }
        if let Some(phone) = data.phone {
            user.phone = Some(phone);
        }
        if let Some(city) = data.city {
            user.city = Some(city);
        }
        if let Some(avatar) = data.avatar {
            user.avatar = Some(avatar);
        }
        Ok(user.clone())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let (_, hash) = rows
            .iter_mut()
            .find(|(u, _)| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        *hash = password_hash;
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<(), UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let (user, _) = rows
            .iter_mut()
            .find(|(u, _)| u.email == email)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.is_verified = true;
        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(u, _)| u.id != user_id);
        if rows.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Verification codes
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryVerificationCodes {
    rows: Arc<Mutex<Vec<VerificationCodeRecord>>>,
}

impl InMemoryVerificationCodes {
    pub fn insert(&self, record: VerificationCodeRecord) {
        self.rows.lock().unwrap().push(record);
    }

    pub fn all(&self) -> Vec<VerificationCodeRecord> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationCodeRepository for InMemoryVerificationCodes {
    async fn delete_for_email(
        &self,
        email: &str,
        kind: VerificationKind,
    ) -> Result<u64, VerificationCodeRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.email == email && r.kind == kind));
        Ok((before - rows.len()) as u64)
    }

    async fn create(
        &self,
        data: NewVerificationCode,
    ) -> Result<VerificationCodeRecord, VerificationCodeRepositoryError> {
        let record = VerificationCodeRecord {
            id: Uuid::new_v4(),
            email: data.email,
            code: data.code,
            kind: data.kind,
            expires_at: data.expires_at,
            used: false,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_unused(
        &self,
        email: &str,
        code: &str,
        kind: VerificationKind,
    ) -> Result<Option<VerificationCodeRecord>, VerificationCodeRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.email == email && r.code == code && r.kind == kind && !r.used)
            .cloned())
    }

    async fn latest_created_at(
        &self,
        email: &str,
        kind: VerificationKind,
    ) -> Result<Option<DateTime<Utc>>, VerificationCodeRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.email == email && r.kind == kind)
            .map(|r| r.created_at)
            .max())
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), VerificationCodeRepositoryError> {
        if let Some(row) = self.rows.lock().unwrap().iter_mut().find(|r| r.id == id) {
            row.used = true;
        }
        Ok(())
    }

    async fn delete_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, VerificationCodeRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !r.is_expired_at(now));
        Ok((before - rows.len()) as u64)
    }
}

//
// ──────────────────────────────────────────────────────────
// Artisans
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryArtisanRepository {
    rows: Arc<Mutex<Vec<ArtisanResult>>>,
    fail_creates: Arc<AtomicBool>,
}

impl InMemoryArtisanRepository {
    /// Makes every later `create_profile` fail with a database error.
    pub fn fail_creates(&self) {
        self.fail_creates.store(true, Ordering::SeqCst);
    }

    pub fn insert(&self, artisan: ArtisanResult) {
        self.rows.lock().unwrap().push(artisan);
    }

    pub fn all(&self) -> Vec<ArtisanResult> {
        self.rows.lock().unwrap().clone()
    }

    fn modify(
        &self,
        artisan_id: Uuid,
        f: impl FnOnce(&mut ArtisanResult),
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let artisan = rows
            .iter_mut()
            .find(|a| a.id == artisan_id)
            .ok_or(ArtisanRepositoryError::ArtisanNotFound)?;
        f(artisan);
        Ok(artisan.clone())
    }
}

#[async_trait]
impl ArtisanRepository for InMemoryArtisanRepository {
    async fn create_profile(
        &self,
        data: CreateArtisanData,
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(ArtisanRepositoryError::DatabaseError(
                "connection reset".to_string(),
            ));
        }
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.user_id == data.user_id) {
            return Err(ArtisanRepositoryError::ProfileAlreadyExists);
        }
        let artisan = ArtisanResult {
            bio: data.bio,
            experience: data.experience,
            services: data.services,
            ..sample_artisan(data.user_id)
        };
        rows.push(artisan.clone());
        Ok(artisan)
    }

    async fn find_by_id(
        &self,
        artisan_id: Uuid,
    ) -> Result<Option<ArtisanResult>, ArtisanRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == artisan_id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ArtisanResult>, ArtisanRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.user_id == user_id)
            .cloned())
    }

    async fn update_profile(
        &self,
        artisan_id: Uuid,
        data: UpdateArtisanData,
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        self.modify(artisan_id, |a| {
            if let Some(bio) = data.bio {
                a.bio = bio;
            }
            if let Some(experience) = data.experience {
                a.experience = experience;
            }
            if let Some(available) = data.is_available {
                a.is_available = available;
            }
            if let Some(services) = data.services {
                a.services = services;
            }
            if let Some(availability) = data.availability {
                a.availability = availability;
            }
            if let Some(response_time) = data.response_time {
                a.response_time = response_time;
            }
            if let Some(status) = data.approval_status {
                a.approval_status = status;
            }
        })
    }

    async fn increment_completed_jobs(
        &self,
        artisan_id: Uuid,
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        self.modify(artisan_id, |a| a.completed_jobs += 1)
    }

    async fn update_rating(
        &self,
        artisan_id: Uuid,
        rating: f64,
        total_reviews: i32,
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        self.modify(artisan_id, |a| {
            a.rating = rating;
            a.total_reviews = total_reviews;
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Security & mail
// ──────────────────────────────────────────────────────────
//

/// Stores `hashed:{password}` so tests can assert on the stored value.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

pub struct StaticTokenProvider;

impl TokenProvider for StaticTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        Ok(format!("token-{role}-{user_id}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Err(TokenError::MalformedToken)
    }
}

#[derive(Clone, Default)]
pub struct RecordingEmailNotifier {
    codes: Arc<Mutex<Vec<String>>>,
    bookings: Arc<Mutex<Vec<BookingEmail>>>,
    fail: bool,
}

impl RecordingEmailNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn verification_codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }

    pub fn booking_emails(&self) -> Vec<BookingEmail> {
        self.bookings.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserEmailNotifier for RecordingEmailNotifier {
    async fn send_verification_code(
        &self,
        _to_email: &str,
        _full_name: &str,
        code: &str,
    ) -> Result<(), UserEmailNotificationError> {
        if self.fail {
            return Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp unavailable".to_string(),
            ));
        }
        self.codes.lock().unwrap().push(code.to_string());
        Ok(())
    }

    async fn send_booking_update(
        &self,
        email: BookingEmail,
    ) -> Result<(), UserEmailNotificationError> {
        if self.fail {
            return Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp unavailable".to_string(),
            ));
        }
        self.bookings.lock().unwrap().push(email);
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Push subscriptions
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryPushSubscriptions {
    rows: Arc<Mutex<Vec<PushSubscriptionRecord>>>,
}

impl InMemoryPushSubscriptions {
    pub fn all(&self) -> Vec<PushSubscriptionRecord> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushSubscriptionRepository for InMemoryPushSubscriptions {
    async fn upsert(
        &self,
        subscription: NewPushSubscription,
    ) -> Result<PushSubscriptionRecord, PushSubscriptionRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|r| r.endpoint == subscription.endpoint) {
            existing.user_id = subscription.user_id;
            existing.p256dh = subscription.p256dh;
            existing.auth = subscription.auth;
            return Ok(existing.clone());
        }

        let record = PushSubscriptionRecord {
            id: Uuid::new_v4(),
            user_id: subscription.user_id,
            endpoint: subscription.endpoint,
            p256dh: subscription.p256dh,
            auth: subscription.auth,
            created_at: Utc::now(),
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PushSubscriptionRecord>, PushSubscriptionRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), PushSubscriptionRepositoryError> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn delete_for_user(
        &self,
        user_id: Uuid,
        endpoint: &str,
    ) -> Result<u64, PushSubscriptionRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.user_id == user_id && r.endpoint == endpoint));
        Ok((before - rows.len()) as u64)
    }
}

//
// ──────────────────────────────────────────────────────────
// Notifications
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryNotifications {
    rows: Arc<Mutex<Vec<NotificationResult>>>,
}

impl InMemoryNotifications {
    pub fn all(&self) -> Vec<NotificationResult> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotifications {
    async fn create(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationResult, NotificationRepositoryError> {
        let row = NotificationResult {
            id: Uuid::new_v4(),
            user_id: notification.user_id,
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            data: notification.data,
            is_read: false,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: u64,
        unread_only: bool,
    ) -> Result<Vec<NotificationResult>, NotificationRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id && (!unread_only || !n.is_read))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_unread(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as u64)
    }

    async fn mark_read(
        &self,
        user_id: Uuid,
        ids: &[Uuid],
    ) -> Result<u64, NotificationRepositoryError> {
        let mut updated = 0;
        for n in self.rows.lock().unwrap().iter_mut() {
            if n.user_id == user_id && ids.contains(&n.id) && !n.is_read {
                n.is_read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError> {
        let mut updated = 0;
        for n in self.rows.lock().unwrap().iter_mut() {
            if n.user_id == user_id && !n.is_read {
                n.is_read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }
}

/// Captures every event instead of persisting it.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<(Uuid, NotificationEvent, NotificationData)>>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(Uuid, NotificationEvent, NotificationData)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotifyUserUseCase for RecordingNotifier {
    async fn notify(
        &self,
        user_id: Uuid,
        event: NotificationEvent,
        data: NotificationData,
    ) -> Option<NotificationResult> {
        self.events
            .lock()
            .unwrap()
            .push((user_id, event.clone(), data));
        Some(NotificationResult {
            id: Uuid::new_v4(),
            user_id,
            kind: event.kind(),
            title: event.title(),
            message: event.message(),
            data,
            is_read: false,
            created_at: Utc::now(),
        })
    }
}

#[derive(Clone, Default)]
pub struct RecordingPush {
    sent: Arc<Mutex<Vec<(Uuid, PushPayload)>>>,
}

impl RecordingPush {
    pub fn sent(&self) -> Vec<(Uuid, PushPayload)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SendPushUseCase for RecordingPush {
    async fn send_to_user(&self, user_id: Uuid, payload: PushPayload) -> DeliveryReport {
        self.sent.lock().unwrap().push((user_id, payload));
        DeliveryReport {
            success: true,
            sent: 1,
            failed: 0,
        }
    }

    async fn send_to_users(&self, user_ids: &[Uuid], payload: PushPayload) -> Vec<DeliveryReport> {
        let mut reports = Vec::with_capacity(user_ids.len());
        for id in user_ids {
            reports.push(self.send_to_user(*id, payload.clone()).await);
        }
        reports
    }
}

//
// ──────────────────────────────────────────────────────────
// Bookings & reviews
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryBookings {
    rows: Arc<Mutex<Vec<BookingResult>>>,
}

impl InMemoryBookings {
    pub fn insert(&self, booking: BookingResult) {
        self.rows.lock().unwrap().push(booking);
    }

    pub fn get(&self, booking_id: Uuid) -> Option<BookingResult> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
    }

    pub fn all(&self) -> Vec<BookingResult> {
        self.rows.lock().unwrap().clone()
    }

    fn modify(
        &self,
        booking_id: Uuid,
        f: impl FnOnce(&mut BookingResult),
    ) -> Result<BookingResult, BookingRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let booking = rows
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or(BookingRepositoryError::NotFound)?;
        f(booking);
        Ok(booking.clone())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn create(&self, data: CreateBookingData) -> Result<BookingResult, BookingRepositoryError> {
        let booking = BookingResult {
            id: Uuid::new_v4(),
            customer_id: data.customer_id,
            artisan_id: data.artisan_id,
            service: data.service,
            date: data.date,
            time: data.time,
            address: data.address,
            description: data.description,
            urgency: data.urgency,
            status: BookingStatus::Pending,
            total_price: None,
            rating: None,
            review: None,
            created_at: Utc::now(),
        };
        self.insert(booking.clone());
        Ok(booking)
    }

    async fn find_by_id(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<BookingResult>, BookingRepositoryError> {
        Ok(self.get(booking_id))
    }

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<BookingResult, BookingRepositoryError> {
        self.modify(booking_id, |b| b.status = status)
    }

    async fn set_review(
        &self,
        booking_id: Uuid,
        rating: i32,
        review: Option<String>,
    ) -> Result<BookingResult, BookingRepositoryError> {
        self.modify(booking_id, |b| {
            b.rating = Some(rating);
            b.review = review;
        })
    }
}

/// Enforces one review per booking, like the unique index.
#[derive(Clone, Default)]
pub struct InMemoryReviews {
    rows: Arc<Mutex<Vec<ReviewResult>>>,
}

impl InMemoryReviews {
    pub fn all(&self) -> Vec<ReviewResult> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviews {
    async fn create(&self, data: CreateReviewData) -> Result<ReviewResult, ReviewRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.booking_id == data.booking_id) {
            return Err(ReviewRepositoryError::AlreadyExists);
        }
        let review = ReviewResult {
            id: Uuid::new_v4(),
            booking_id: data.booking_id,
            customer_id: data.customer_id,
            artisan_id: data.artisan_id,
            rating: data.rating,
            comment: data.comment,
            created_at: Utc::now(),
        };
        rows.push(review.clone());
        Ok(review)
    }

    async fn find_by_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<ReviewResult>, ReviewRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.booking_id == booking_id)
            .cloned())
    }

    async fn ratings_for_artisan(
        &self,
        artisan_id: Uuid,
    ) -> Result<Vec<i32>, ReviewRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.artisan_id == artisan_id)
            .map(|r| r.rating)
            .collect())
    }
}

//
// ──────────────────────────────────────────────────────────
// Payments
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryPayments {
    rows: Arc<Mutex<Vec<PaymentResult>>>,
}

impl InMemoryPayments {
    pub fn insert(&self, payment: PaymentResult) {
        self.rows.lock().unwrap().push(payment);
    }

    pub fn all(&self) -> Vec<PaymentResult> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPayments {
    async fn create(&self, data: CreatePaymentData) -> Result<PaymentResult, PaymentRepositoryError> {
        let payment = PaymentResult {
            id: Uuid::new_v4(),
            booking_id: data.booking_id,
            customer_id: data.customer_id,
            artisan_id: data.artisan_id,
            amount: data.amount,
            currency: DEFAULT_CURRENCY.to_string(),
            method: data.method,
            status: PaymentStatus::Pending,
            transaction_id: None,
            created_at: Utc::now(),
        };
        self.insert(payment.clone());
        Ok(payment)
    }

    async fn list_for_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Vec<PaymentResult>, PaymentRepositoryError> {
        let mut rows: Vec<_> = self
            .all()
            .into_iter()
            .filter(|p| p.booking_id == booking_id)
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
