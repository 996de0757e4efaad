use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::{CancelToken, SupersededBy};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::field::{FieldError, render_frame_cancelable};
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, replacing any request the worker has not picked up yet and
    /// cancelling the one it is rendering. Returns the request's generation.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();
        log::trace!("submitted render generation {}", generation);

        generation
    }

    pub fn shutdown(&mut self) {
        {
            // held so the flag cannot flip between the worker's check and its wait
            let _guard = self.shared.latest_request.lock();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel_token =
                SupersededBy::new(job_generation, &shared.generation, &shared.shutdown);

            let start = Instant::now();
            let result = Self::render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                log::debug!("discarding superseded render {}", job_generation);
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => {
                    log::debug!(
                        "render {} finished in {:?}",
                        job_generation,
                        render_duration
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        viewport: request.viewport,
                        pixel_buffer,
                        render_duration,
                    })
                }
                Err(FieldError::Cancelled(_)) => continue,
                Err(err) => {
                    log::warn!("render {} failed: {}", job_generation, err);

                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request<C: CancelToken>(
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<PixelBuffer, FieldError> {
        let params =
            MandelbrotParams::new(request.max_iterations, request.escape_threshold_squared)?;

        render_frame_cancelable(&request.viewport, params, request.colour_map_kind, cancel)
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
