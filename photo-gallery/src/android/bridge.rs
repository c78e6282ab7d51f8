// JNI bridge to MainActivity
//
// Every call attaches the current thread to the JVM. Calls that wait for
// the user (permission prompts, camera, delete confirmation) poll static
// result fields, so they run on the blocking thread pool.

use super::wire;
use crate::config::AndroidConfig;
use crate::error::ProviderError;
use crate::models::{Asset, AssetId, AssetPage, CameraFacing, PageRequest, Permission};
use crate::provider::{CaptureProvider, MediaStore, ShareProvider};
use jni::objects::{JClass, JObject, JString, JValue};
use jni::JNIEnv;
use ndk_context::android_context;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// 60 seconds
const POLL_ATTEMPTS: u32 = 600;

fn jni_error(context: &'static str) -> impl Fn(jni::errors::Error) -> ProviderError {
    move |e| ProviderError::Other(format!("{} failed: {}", context, e))
}

fn get_app_class_loader<'a>(env: &mut JNIEnv<'a>) -> Result<JObject<'a>, ProviderError> {
    let thread_cls = env
        .find_class("android/app/ActivityThread")
        .map_err(jni_error("ActivityThread lookup"))?;
    let thread = env
        .call_static_method(
            &thread_cls,
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )
        .and_then(|v| v.l())
        .map_err(jni_error("currentActivityThread"))?;
    let app = env
        .call_method(&thread, "getApplication", "()Landroid/app/Application;", &[])
        .and_then(|v| v.l())
        .map_err(jni_error("getApplication"))?;
    if app.is_null() {
        return Err(ProviderError::Other(
            "Application not initialized".to_string(),
        ));
    }
    env.call_method(&app, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(|v| v.l())
        .map_err(jni_error("getClassLoader"))
}

fn get_activity<'a>(
    env: &mut JNIEnv<'a>,
    activity_class: &str,
) -> Result<(JObject<'a>, JClass<'a>), ProviderError> {
    let loader = get_app_class_loader(env)?;
    // ClassLoader.loadClass wants dots, JNI signatures want slashes
    let name = env
        .new_string(activity_class.replace('/', "."))
        .map_err(jni_error("new_string"))?;
    let cls: JClass = env
        .call_method(
            &loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&name)],
        )
        .and_then(|v| v.l())
        .map_err(jni_error("loadClass"))?
        .into();

    let signature = format!("()L{};", activity_class);
    let activity = env
        .call_static_method(&cls, "getInstance", &signature, &[])
        .and_then(|v| v.l())
        .map_err(|e| {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            jni_error("getInstance")(e)
        })?;
    if activity.is_null() {
        return Err(ProviderError::Other(
            "MainActivity instance is null - Activity not initialized?".to_string(),
        ));
    }
    Ok((activity, cls))
}

/// Attaches to the JVM and runs `f` with the activity instance and class
fn with_activity<T>(
    activity_class: &str,
    f: impl FnOnce(&mut JNIEnv, &JObject, &JClass) -> Result<T, ProviderError>,
) -> Result<T, ProviderError> {
    let vm_ptr = android_context().vm() as *mut *const jni::sys::JNIInvokeInterface_;
    let vm = unsafe { jni::JavaVM::from_raw(vm_ptr) }.map_err(jni_error("JavaVM"))?;
    let mut env = vm.attach_current_thread().map_err(jni_error("JNI attach"))?;
    let (activity, cls) = get_activity(&mut env, activity_class)?;
    f(&mut *env, &activity, &cls)
}

async fn blocking<T, F>(f: F) -> Result<T, ProviderError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ProviderError> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

fn to_string(env: &mut JNIEnv, obj: JObject) -> Result<Option<String>, ProviderError> {
    if obj.is_null() {
        return Ok(None);
    }
    let s: String = env
        .get_string((&obj).into())
        .map_err(jni_error("String conversion"))?
        .into();
    Ok(Some(s))
}

fn call_bool(env: &mut JNIEnv, activity: &JObject, method: &'static str) -> Result<bool, ProviderError> {
    env.call_method(activity, method, "()Z", &[])
        .and_then(|v| v.z())
        .map_err(jni_error(method))
}

fn call_with_string(
    env: &mut JNIEnv,
    activity: &JObject,
    method: &'static str,
    arg: &str,
) -> Result<(), ProviderError> {
    let arg: JString = env.new_string(arg).map_err(jni_error("new_string"))?;
    env.call_method(activity, method, "(Ljava/lang/String;)V", &[JValue::Object(&arg)])
        .map_err(jni_error(method))?;
    Ok(())
}

fn static_string(
    env: &mut JNIEnv,
    cls: &JClass,
    getter: &'static str,
) -> Result<Option<String>, ProviderError> {
    let obj = env
        .call_static_method(cls, getter, "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .map_err(jni_error(getter))?;
    to_string(env, obj)
}

fn clear_last_result(env: &mut JNIEnv, cls: &JClass) -> Result<(), ProviderError> {
    env.call_static_method(cls, "clearLastResult", "()V", &[])
        .map_err(jni_error("clearLastResult"))?;
    Ok(())
}

/// Waits until `getter` or `getLastError` returns a value
fn poll_result(
    env: &mut JNIEnv,
    cls: &JClass,
    getter: &'static str,
    what: &str,
) -> Result<String, ProviderError> {
    for _ in 0..POLL_ATTEMPTS {
        std::thread::sleep(POLL_INTERVAL);

        if let Some(result) = static_string(env, cls, getter)? {
            return Ok(result);
        }
        if let Some(err) = static_string(env, cls, "getLastError")? {
            if err.to_ascii_lowercase().contains("cancel") {
                return Err(ProviderError::Cancelled(err));
            }
            return Err(ProviderError::Other(err));
        }
    }
    Err(ProviderError::Timeout(format!("{} - no response", what)))
}

fn prompt_permission(activity_class: &str, method: &'static str) -> Result<Permission, ProviderError> {
    with_activity(activity_class, |env, activity, cls| {
        clear_last_result(env, cls)?;
        env.call_method(activity, method, "()V", &[])
            .map_err(jni_error(method))?;
        let result = poll_result(env, cls, "getLastResult", method)?;
        wire::parse_permission(&result)
    })
}

/// Photo library backed by Android's MediaStore
#[derive(Debug, Clone)]
pub struct AndroidMediaStore {
    activity_class: String,
}

impl AndroidMediaStore {
    pub fn new(config: &AndroidConfig) -> Self {
        Self {
            activity_class: config.main_activity_class.clone(),
        }
    }
}

impl MediaStore for AndroidMediaStore {
    async fn permission(&self) -> Result<Permission, ProviderError> {
        let class = self.activity_class.clone();
        blocking(move || {
            with_activity(&class, |env, activity, _| {
                call_bool(env, activity, "hasMediaPermission").map(Permission::from)
            })
        })
        .await
    }

    async fn request_permission(&self) -> Result<Permission, ProviderError> {
        let class = self.activity_class.clone();
        blocking(move || prompt_permission(&class, "requestMediaPermission")).await
    }

    async fn list_photos(&self, request: &PageRequest) -> Result<AssetPage, ProviderError> {
        let class = self.activity_class.clone();
        let page_size = request.page_size as i32;
        let after = request
            .after
            .as_ref()
            .map(|c| c.as_str().to_string())
            .unwrap_or_default();
        blocking(move || {
            let json = with_activity(&class, |env, activity, _| {
                let after: JString = env.new_string(&after).map_err(jni_error("new_string"))?;
                let obj = env
                    .call_method(
                        activity,
                        "queryPhotos",
                        "(ILjava/lang/String;)Ljava/lang/String;",
                        &[JValue::Int(page_size), JValue::Object(&after)],
                    )
                    .and_then(|v| v.l())
                    .map_err(jni_error("queryPhotos"))?;
                to_string(env, obj)?
                    .ok_or_else(|| ProviderError::Other("queryPhotos returned null".to_string()))
            })?;
            wire::parse_page(&json)
        })
        .await
    }

    async fn delete_assets(&self, ids: &[AssetId]) -> Result<(), ProviderError> {
        let class = self.activity_class.clone();
        let payload = wire::encode_ids(ids)?;
        blocking(move || {
            with_activity(&class, |env, activity, cls| {
                clear_last_result(env, cls)?;
                call_with_string(env, activity, "deleteAssets", &payload)?;
                // Android asks the user to confirm deletions
                match poll_result(env, cls, "getLastResult", "deleteAssets")?.as_str() {
                    "ok" => Ok(()),
                    other => Err(ProviderError::Other(format!("Delete rejected: {}", other))),
                }
            })
        })
        .await
    }

    async fn save_photo(&self, file_uri: &str) -> Result<Asset, ProviderError> {
        let class = self.activity_class.clone();
        let file_uri = file_uri.to_string();
        blocking(move || {
            let json = with_activity(&class, |env, activity, _| {
                let arg: JString = env.new_string(&file_uri).map_err(jni_error("new_string"))?;
                let obj = env
                    .call_method(
                        activity,
                        "savePhoto",
                        "(Ljava/lang/String;)Ljava/lang/String;",
                        &[JValue::Object(&arg)],
                    )
                    .and_then(|v| v.l())
                    .map_err(jni_error("savePhoto"))?;
                to_string(env, obj)?
                    .ok_or_else(|| ProviderError::Other("savePhoto returned null".to_string()))
            })?;
            wire::parse_asset(&json)
        })
        .await
    }
}

/// Camera launched through MainActivity
#[derive(Debug, Clone)]
pub struct AndroidCamera {
    activity_class: String,
}

impl AndroidCamera {
    pub fn new(config: &AndroidConfig) -> Self {
        Self {
            activity_class: config.main_activity_class.clone(),
        }
    }
}

impl CaptureProvider for AndroidCamera {
    async fn permission(&self) -> Result<Permission, ProviderError> {
        let class = self.activity_class.clone();
        blocking(move || {
            with_activity(&class, |env, activity, _| {
                call_bool(env, activity, "hasCameraPermission").map(Permission::from)
            })
        })
        .await
    }

    async fn request_permission(&self) -> Result<Permission, ProviderError> {
        let class = self.activity_class.clone();
        blocking(move || prompt_permission(&class, "requestCameraPermission")).await
    }

    async fn take_picture(&self, facing: CameraFacing) -> Result<String, ProviderError> {
        let class = self.activity_class.clone();
        let front = facing == CameraFacing::Front;
        blocking(move || {
            with_activity(&class, |env, activity, cls| {
                clear_last_result(env, cls)?;
                env.call_method(activity, "launchCamera", "(Z)V", &[JValue::Bool(front.into())])
                    .map_err(jni_error("launchCamera"))?;
                let path = poll_result(env, cls, "getLastPhotoPath", "Camera")?;
                Ok(if path.contains("://") {
                    path
                } else {
                    format!("file://{}", path)
                })
            })
        })
        .await
    }
}

/// Android share sheet
#[derive(Debug, Clone)]
pub struct AndroidShare {
    activity_class: String,
}

impl AndroidShare {
    pub fn new(config: &AndroidConfig) -> Self {
        Self {
            activity_class: config.main_activity_class.clone(),
        }
    }
}

impl ShareProvider for AndroidShare {
    async fn is_available(&self) -> bool {
        let class = self.activity_class.clone();
        let available = blocking(move || {
            with_activity(&class, |env, activity, _| call_bool(env, activity, "canShare"))
        })
        .await;
        match available {
            Ok(available) => available,
            Err(e) => {
                log::warn!("Share availability check failed: {}", e);
                false
            }
        }
    }

    async fn share(&self, uri: &str) -> Result<(), ProviderError> {
        let class = self.activity_class.clone();
        let uri = uri.to_string();
        blocking(move || {
            with_activity(&class, |env, activity, _| {
                call_with_string(env, activity, "shareUri", &uri)
            })
        })
        .await
    }
}
