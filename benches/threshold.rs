use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ferrohue::modules::threshold::{hue_window, threshold, HueWrap};
use ferrohue::Frame;

fn make_test_frame() -> Frame {
	let mut frame = Frame::filled(640, 480, [40, 60, 80]).unwrap();
	for y in 200..280 {
		for x in 300..380 {
			frame.set_pixel(x, y, [0, 165, 255]);
		}
	}
	frame
}

fn bench_threshold(c: &mut Criterion) {
	let frame = make_test_frame();
	let window = hue_window([0, 165, 255], HueWrap::Clamp);

	c.bench_function("threshold_640x480", |b| {
		b.iter(|| threshold(black_box(&frame), &window));
	});

	let mask = threshold(&frame, &window);
	c.bench_function("bounding_box_640x480", |b| {
		b.iter(|| black_box(&mask).bounding_box());
	});
}

criterion_group!(benches, bench_threshold);
criterion_main!(benches);
