#![no_std]
#![no_main]

// 启用 alloc（报文编码）
extern crate alloc;

use embedded_alloc::LlffHeap as Heap;

#[global_allocator]
static HEAP: Heap = Heap::empty();

mod drivers;
mod tasks;

use coin_pulse::event::{Event, EventChannel};
use coin_pulse::transport::SerialConfig;
use coin_pulse::{CoinConfig, Debouncer, EdgePolarity};
use defmt::{info, unwrap, warn};
use drivers::serial::SerialReporter;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_stm32::Config;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::Pull;
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::usart::{self, UartTx};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

/// 投币器配置：低有效输出（集电极开路接地）用下降沿，高有效输出改为 Rising
const COIN_CONFIG: CoinConfig = CoinConfig::new().with_polarity(EdgePolarity::Falling);

/// 没有接投币器时用模拟脉冲演示
const MOCK_ACCEPTOR: bool = false;

/// 模拟投币间隔（秒）
const MOCK_INTERVAL_SECS: u64 = 3;

/// 高优先级执行器：边沿上下文，可抢占轮询任务
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn UART4() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

static DEBOUNCER: StaticCell<Debouncer> = StaticCell::new();
static EVENT_CHANNEL: StaticCell<EventChannel> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    // 初始化堆内存 (8KB，仅用于报文编码)
    {
        use core::mem::MaybeUninit;
        use core::ptr::addr_of_mut;
        const HEAP_SIZE: usize = 8 * 1024;
        static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
        unsafe {
            let heap_ptr = addr_of_mut!(HEAP_MEM) as *mut u8;
            HEAP.init(heap_ptr as usize, HEAP_SIZE)
        }
    }

    let p = embassy_stm32::init(Config::default());

    info!("=== Coin Pulse Reader ===");
    info!("Initializing...");

    let config = COIN_CONFIG;
    unwrap!(config.validate());

    let debouncer: &'static Debouncer = DEBOUNCER.init(Debouncer::from_config(&config));
    let event_channel: &'static EventChannel = EVENT_CHANNEL.init(EventChannel::new());

    info!("Event system initialized");

    // 串口上报 (USART1 TX = PA9)
    let serial_config = SerialConfig::default();
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = serial_config.baud_rate;
    let tx = unwrap!(UartTx::new_blocking(p.USART1, p.PA9, uart_config));

    info!("Spawning tasks...");

    // 边沿上下文
    interrupt::UART4.set_priority(Priority::P6);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::UART4);

    if MOCK_ACCEPTOR {
        info!("Running in MOCK mode (no acceptor wired)");
        high_spawner.spawn(unwrap!(drivers::mock_acceptor::mock_acceptor_task(
            debouncer,
            MOCK_INTERVAL_SECS
        )));
        info!("  - Mock acceptor task spawned");
    } else {
        // 集电极开路输出，上拉
        let coin_pin = ExtiInput::new(p.PA0, p.EXTI0, Pull::Up);
        high_spawner.spawn(unwrap!(tasks::edge_task::edge_task(
            coin_pin,
            debouncer,
            config.polarity
        )));
        info!("  - Edge task spawned");
    }

    spawner.spawn(unwrap!(tasks::report_task::report_task(
        event_channel.receiver(),
        SerialReporter::new(tx)
    )));
    info!("  - Report task spawned");

    // 就绪报文先于任何投币报文入队
    if event_channel.try_send(Event::Ready).is_err() {
        warn!("Ready event dropped");
    }

    spawner.spawn(unwrap!(tasks::coin_task::coin_task(
        debouncer,
        config,
        event_channel.sender()
    )));
    info!("  - Coin task spawned");

    info!("=== System ready ===");

    // 主任务空转
    loop {
        Timer::after_secs(60).await;
        info!("Main: System running...");
    }
}
