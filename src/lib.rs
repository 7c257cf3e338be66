/*!
# BankDash

The backend and data-loading plumbing of a financial dashboard, built in Rust.

## Overview

The dashboard shows six widgets (balance history, credit cards, expense
breakdown, recent transactions, weekly activity, quick transfer) plus a
settings/profile editor. This crate provides everything behind them:

- Mock JSON data sources for the six dashboard slices, exposed through
  simple HTTP route handlers with a shared Cache-Control policy.
- A JSON-file settings store with GET / POST (multipart, avatar upload) /
  PUT (single-field validation echo) routes.
- A resource fetch client issuing exactly one GET per call with typed
  errors (HTTP-status vs. transport).
- A data-loading coordinator that fetches the six slices independently and
  concurrently, tracks per-resource {data, loading, error} state, and
  answers "is this slice ready".
- A pure field validator backing the settings form.
- A toast-notification store owned by the composition root.

## Architecture

Client side, loads flow `DashboardCoordinator -> ResourceLoader -> ApiClient`;
server side, requests flow `Router -> handlers -> fixtures / SettingsStore`.
The coordinator is the one deliberately designed piece: a single
parameterized named-async-resource store updated through a reducer, with one
task per slice and isolated failure domains. Resources whose data was
obtained server-side (the SSR flags) are trusted as-is and never fetched.

## Modules

- **resource**: the `ResourceKey` enum and URL path derivation
- **models**: serde records for every dashboard slice and the settings profile
- **mock**: deterministic fixture data backing the endpoints
- **store**: JSON-file persistence for the settings profile
- **app**: routing, handlers and the server entry point
- **client**: the resource fetch client
- **coordinator**: the multi-resource data-loading coordinator
- **validator**: pure field validation for the settings form
- **toast**: the pub/sub toast store
- **config**: environment-derived runtime configuration
- **error**: the error taxonomy (`FetchError`, `StoreError`, `ApiError`)

## REST API Endpoints

- `GET /api/{cards,transactions,weekly-activity,expense-statistics,quick-transfer-users,balance-history}`
  — one dashboard slice as a JSON array
- `GET /api/settings` — the stored profile
- `POST /api/settings` — multipart profile update with optional avatar upload
- `PUT /api/settings` — `{ field, value }` validation echo
- `GET /uploads/{file}` — uploaded avatars
- `GET /health`, `GET /` — liveness and service info
*/

pub mod app;
pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod mock;
pub mod models;
pub mod resource;
pub mod store;
pub mod toast;
pub mod validator;

pub use client::ApiClient;
pub use config::Config;
pub use coordinator::{DashboardCoordinator, InitialData, LoadState, ResourceLoader, SsrConfig};
pub use error::{ApiError, FetchError, StoreError};
pub use resource::{DASHBOARD_RESOURCES, ResourceKey};
pub use store::SettingsStore;
pub use toast::{Toast, ToastStore, ToastVariant};
pub use validator::validate_field;
