//! Simple knob example
//!
//! Demonstrates basic usage of the rotary-encoder-driver crate on the
//! Raspberry Pi Pico 2. The decode loop runs in its own task; the main
//! loop polls the push button every 20 ms, logs the position whenever it
//! changes, and resets it on a button press.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | ENC A     | GP2        | Pull-up enabled              |
//! | ENC B     | GP3        | Pull-up enabled              |
//! | ENC SW    | GP4        | Active-low, pull-up enabled  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use rotary_encoder_driver::{EncoderConfig, EncoderState, EncoderWorker, RotaryEncoder};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Shared between the decode task and the main loop.
static STATE: EncoderState = EncoderState::new();

#[embassy_executor::task]
async fn decode_task(worker: EncoderWorker<'static, Input<'static>, Input<'static>>) {
    // Runs until the main loop detaches the driver; pin errors are
    // infallible on this HAL.
    let _ = worker.run().await;
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder pins (pull-ups; the switch shorts to ground) ---
    let pin_a = Input::new(p.PIN_2, Pull::Up);
    let pin_b = Input::new(p.PIN_3, Pull::Up);
    let button = Input::new(p.PIN_4, Pull::Up);

    let (mut knob, worker) =
        RotaryEncoder::init(&STATE, pin_a, pin_b, button, EncoderConfig::default())
            .expect("Failed to initialise encoder");

    spawner.spawn(decode_task(worker)).unwrap();

    info!("Knob example started — rotate or press to see events");

    let mut last_position = knob.position();

    // Main loop: poll the button at 20 ms, report changes.
    loop {
        if let Err(e) = knob.update() {
            error!("Button poll failed: {}", e);
        }

        if knob.was_button_pressed() {
            info!("Button pressed — resetting position");
            knob.reset_position();
            last_position = 0;
        }

        if knob.was_button_released() {
            info!("Button released");
        }

        let position = knob.position();
        if position != last_position {
            info!("Position: {}", position);
            last_position = position;
        }

        Timer::after(Duration::from_millis(20)).await;
    }
}
