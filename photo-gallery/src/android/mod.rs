//! Android implementations of the capability traits.
//!
//! The Rust side talks to the app's `MainActivity` over JNI. The activity is
//! expected to provide:
//!
//! | method | signature | notes |
//! |---|---|---|
//! | `getInstance` (static) | `()L<activity>;` | current activity |
//! | `clearLastResult` (static) | `()V` | resets the polled fields below |
//! | `getLastResult` (static) | `()Ljava/lang/String;` | result of the last async call |
//! | `getLastPhotoPath` (static) | `()Ljava/lang/String;` | file of the last capture |
//! | `getLastError` (static) | `()Ljava/lang/String;` | error of the last async call |
//! | `hasMediaPermission` | `()Z` | |
//! | `requestMediaPermission` | `()V` | result `"granted"`/`"denied"` |
//! | `hasCameraPermission` | `()Z` | |
//! | `requestCameraPermission` | `()V` | result `"granted"`/`"denied"` |
//! | `queryPhotos` | `(ILjava/lang/String;)Ljava/lang/String;` | JSON page |
//! | `deleteAssets` | `(Ljava/lang/String;)V` | JSON id array, result `"ok"` |
//! | `savePhoto` | `(Ljava/lang/String;)Ljava/lang/String;` | JSON asset |
//! | `launchCamera` | `(Z)V` | `true` for the front lens |
//! | `canShare` | `()Z` | |
//! | `shareUri` | `(Ljava/lang/String;)V` | opens the share sheet |

mod wire;

#[cfg(target_os = "android")]
mod bridge;

#[cfg(target_os = "android")]
pub use bridge::{AndroidCamera, AndroidMediaStore, AndroidShare};
